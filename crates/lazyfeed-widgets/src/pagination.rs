#![forbid(unsafe_code)]

//! Infinite-scroll trigger on the last card.
//!
//! Exactly one card, the current last child, is watched. When it satisfies
//! the intersection condition a batch is generated and the watch is handed
//! to the new last card. The cycle has no end.

use lazyfeed_core::ElementId;
use lazyfeed_runtime::{IntersectionEntry, IntersectionObserver, LayoutSource, ObserverOptions};
use tracing::debug;

use crate::container::CardContainer;
use crate::generator::CardBatchGenerator;
use crate::reveal::RevealObserver;

/// What one pagination trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Sentinel that fired.
    pub previous_sentinel: ElementId,
    /// Sentinel now watched.
    pub sentinel: Option<ElementId>,
    /// Cards appended, in order.
    pub appended: Vec<ElementId>,
}

/// Watches the last card and loads more when it nears the viewport.
#[derive(Debug, Clone)]
pub struct PaginationObserver {
    observer: IntersectionObserver,
    generator: CardBatchGenerator,
    sentinel: Option<ElementId>,
    batches: u64,
}

impl PaginationObserver {
    #[must_use]
    pub fn new(options: ObserverOptions, generator: CardBatchGenerator) -> Self {
        Self {
            observer: IntersectionObserver::new("pagination", options),
            generator,
            sentinel: None,
            batches: 0,
        }
    }

    /// Watch the container's current last card. Returns it, if any.
    pub fn attach(&mut self, container: &CardContainer) -> Option<ElementId> {
        self.retarget(container.last_card())
    }

    /// Card currently watched as sentinel.
    #[must_use]
    pub fn sentinel(&self) -> Option<ElementId> {
        self.sentinel
    }

    #[must_use]
    pub fn batches(&self) -> u64 {
        self.batches
    }

    #[must_use]
    pub fn generator(&self) -> &CardBatchGenerator {
        &self.generator
    }

    #[must_use]
    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }

    /// Pending entries for this frame.
    pub fn take_records(&mut self, layout: &dyn LayoutSource, frame: u64) -> Vec<IntersectionEntry> {
        self.observer.take_records(layout, frame)
    }

    /// Handle a batch. Only the first entry is consulted.
    pub fn handle(
        &mut self,
        entries: &[IntersectionEntry],
        container: &mut CardContainer,
        reveal: &mut RevealObserver,
    ) -> Option<BatchReport> {
        let first = entries.first()?;
        if !first.is_intersecting {
            return None;
        }
        let appended = self.generator.generate(container, reveal);
        self.observer.unobserve(first.target);
        self.batches += 1;
        let sentinel = self.retarget(container.last_card());
        debug!(
            from = %first.target,
            to = ?sentinel,
            batch = self.batches,
            "sentinel handed off"
        );
        Some(BatchReport {
            previous_sentinel: first.target,
            sentinel,
            appended,
        })
    }

    fn retarget(&mut self, next: Option<ElementId>) -> Option<ElementId> {
        if let Some(old) = self.sentinel.take() {
            self.observer.unobserve(old);
        }
        if let Some(card) = next {
            self.observer.observe(card);
        }
        self.sentinel = next;
        debug_assert!(self.observer.watched_count() <= 1);
        next
    }
}
