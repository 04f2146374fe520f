#![forbid(unsafe_code)]

//! A single card on the page.

use bitflags::bitflags;
use lazyfeed_core::ElementId;

bitflags! {
    /// Presentation classes carried by a card.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CardClass: u8 {
        /// The presentational class every card carries.
        const CARD = 1 << 0;
        /// Revealed state.
        const SHOW = 1 << 1;
    }
}

/// One list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: ElementId,
    text: String,
    classes: CardClass,
}

impl Card {
    /// A fresh, unrevealed card.
    #[must_use]
    pub fn new(id: ElementId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            classes: CardClass::CARD,
        }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn classes(&self) -> CardClass {
        self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: CardClass) -> bool {
        self.classes.contains(class)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.classes.contains(CardClass::SHOW)
    }

    /// Set or clear the `SHOW` class. Returns `true` if the state changed.
    pub fn set_revealed(&mut self, revealed: bool) -> bool {
        let before = self.is_revealed();
        self.classes.set(CardClass::SHOW, revealed);
        before != revealed
    }
}
