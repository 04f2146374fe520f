#![forbid(unsafe_code)]

//! Progressive reveal of cards as they scroll into view.
//!
//! Each entry sets the card's revealed state to the entry's intersection
//! condition, so a non-intersecting report clears it. A card reported
//! intersecting is unwatched on the spot, which in practice freezes it in
//! the revealed state.

use lazyfeed_core::ElementId;
use lazyfeed_runtime::{IntersectionEntry, IntersectionObserver, LayoutSource, ObserverOptions};
use tracing::{debug, trace};

use crate::container::CardContainer;

/// Result of handling one reveal batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    /// Cards whose state went from hidden to revealed.
    pub revealed: usize,
    /// Cards whose state went from revealed to hidden.
    pub hidden: usize,
    /// Cards unwatched because they were reported intersecting.
    pub released: usize,
}

/// Watches cards and toggles their revealed state.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    observer: IntersectionObserver,
}

impl RevealObserver {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            observer: IntersectionObserver::new("reveal", options),
        }
    }

    /// Start watching a card.
    pub fn watch(&mut self, card: ElementId) -> bool {
        self.observer.observe(card)
    }

    #[must_use]
    pub fn is_watching(&self, card: ElementId) -> bool {
        self.observer.is_watching(card)
    }

    #[must_use]
    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }

    /// Pending entries for this frame.
    pub fn take_records(&mut self, layout: &dyn LayoutSource, frame: u64) -> Vec<IntersectionEntry> {
        self.observer.take_records(layout, frame)
    }

    /// Apply a batch to the container.
    pub fn handle(
        &mut self,
        entries: &[IntersectionEntry],
        container: &mut CardContainer,
    ) -> RevealOutcome {
        let mut outcome = RevealOutcome::default();
        for entry in entries {
            if let Some(card) = container.get_mut(entry.target)
                && card.set_revealed(entry.is_intersecting)
            {
                if entry.is_intersecting {
                    outcome.revealed += 1;
                    trace!(card = %entry.target, ratio = entry.intersection_ratio, "revealed");
                } else {
                    outcome.hidden += 1;
                }
            }
            if entry.is_intersecting && self.observer.unobserve(entry.target) {
                outcome.released += 1;
            }
        }
        if outcome.revealed + outcome.hidden > 0 {
            debug!(
                revealed = outcome.revealed,
                hidden = outcome.hidden,
                still_watched = self.observer.watched_count(),
                "reveal batch"
            );
        }
        outcome
    }
}
