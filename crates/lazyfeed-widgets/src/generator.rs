#![forbid(unsafe_code)]

//! Synthesis of placeholder card batches.

use lazyfeed_core::ElementId;
use tracing::info;

use crate::container::CardContainer;
use crate::reveal::RevealObserver;

/// Number of cards appended per batch by default.
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Text of every generated card by default.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "New Card";

/// Appends fixed-size batches of placeholder cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBatchGenerator {
    batch_size: usize,
    placeholder: String,
}

impl Default for CardBatchGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, DEFAULT_PLACEHOLDER_TEXT)
    }
}

impl CardBatchGenerator {
    #[must_use]
    pub fn new(batch_size: usize, placeholder: impl Into<String>) -> Self {
        Self {
            batch_size,
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Create `batch_size` cards, enroll each with `reveal`, and append them
    /// in creation order. Returns the new ids.
    pub fn generate(
        &self,
        container: &mut CardContainer,
        reveal: &mut RevealObserver,
    ) -> Vec<ElementId> {
        let mut created = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            let card = container.create_card(self.placeholder.as_str());
            let id = card.id();
            reveal.watch(id);
            container.append(card);
            created.push(id);
        }
        info!(
            appended = created.len(),
            total = container.len(),
            "card batch generated"
        );
        created
    }
}
