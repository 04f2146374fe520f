#![forbid(unsafe_code)]

//! Intersection observer with explicit per-element registration state.
//!
//! # Design
//!
//! Registrations are kept in a `Vec` in registration order, with an
//! `FxHashMap` from element to slot for O(1) lookup. Unwatching leaves the
//! slot in place tagged [`WatchState::Unwatched`]; tombstones are compacted
//! lazily during [`IntersectionObserver::take_records`] once they outnumber
//! live registrations.
//!
//! Records are pulled, not pushed: the host calls `take_records` once per
//! frame and hands the batch to whatever owns the observer. This keeps the
//! observer free of callbacks, so the batch handler can mutate both the page
//! and the observer without re-entrancy.
//!
//! # Failure Modes
//!
//! - **Missing element**: a watched element the layout cannot find is skipped
//!   for that frame and keeps its registration.
//! - **Duplicate observe / stray unobserve**: no-ops that return `false`.

use lazyfeed_core::{ElementId, Intersection, Rect, RootMargin, Threshold, debug, trace};
use rustc_hash::FxHashMap;

use crate::entry::IntersectionEntry;
use crate::layout::LayoutSource;

/// Tombstones tolerated before compaction is considered.
const COMPACT_MIN_TOMBSTONES: usize = 32;

/// Observer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction required for the intersection condition.
    pub threshold: Threshold,
    /// Expansion applied to the root before intersecting.
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

/// Registration state of one element with one observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Being evaluated every frame.
    Watched {
        /// Condition value last delivered, `None` before the initial report.
        last_reported: Option<bool>,
    },
    /// Not evaluated. Also the state of elements never observed.
    Unwatched,
}

impl WatchState {
    #[inline]
    #[must_use]
    pub fn is_watched(self) -> bool {
        matches!(self, Self::Watched { .. })
    }
}

#[derive(Debug, Clone)]
struct Registration {
    target: ElementId,
    state: WatchState,
}

/// Watches elements and reports changes of their intersection condition.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    label: &'static str,
    options: ObserverOptions,
    registrations: Vec<Registration>,
    index: FxHashMap<ElementId, usize>,
    watched: usize,
}

impl IntersectionObserver {
    /// Create an observer. `label` names it in log output.
    #[must_use]
    pub fn new(label: &'static str, options: ObserverOptions) -> Self {
        Self {
            label,
            options,
            registrations: Vec::new(),
            index: FxHashMap::default(),
            watched: 0,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Begin watching `target`.
    ///
    /// Returns `false` if it was already watched. A previously unwatched
    /// element starts over: it moves to the end of the delivery order and
    /// gets a fresh initial report.
    pub fn observe(&mut self, target: ElementId) -> bool {
        if let Some(&slot) = self.index.get(&target) {
            if self.registrations[slot].state.is_watched() {
                return false;
            }
            self.registrations.remove(slot);
            self.reindex_from(slot);
        }
        self.index.insert(target, self.registrations.len());
        self.registrations.push(Registration {
            target,
            state: WatchState::Watched {
                last_reported: None,
            },
        });
        self.watched += 1;
        debug!(observer = self.label, %target, watched = self.watched, "observe");
        true
    }

    /// Stop watching `target`. Returns `false` if it was not watched.
    pub fn unobserve(&mut self, target: ElementId) -> bool {
        let Some(&slot) = self.index.get(&target) else {
            return false;
        };
        let reg = &mut self.registrations[slot];
        if !reg.state.is_watched() {
            return false;
        }
        reg.state = WatchState::Unwatched;
        self.watched -= 1;
        debug!(observer = self.label, %target, watched = self.watched, "unobserve");
        true
    }

    /// Stop watching everything. Returns how many registrations were dropped.
    pub fn disconnect(&mut self) -> usize {
        let dropped = self.watched;
        self.registrations.clear();
        self.index.clear();
        self.watched = 0;
        debug!(observer = self.label, dropped, "disconnect");
        dropped
    }

    /// Registration state of `target`.
    #[must_use]
    pub fn watch_state(&self, target: ElementId) -> WatchState {
        self.index
            .get(&target)
            .map_or(WatchState::Unwatched, |&slot| self.registrations[slot].state)
    }

    #[must_use]
    pub fn is_watching(&self, target: ElementId) -> bool {
        self.watch_state(target).is_watched()
    }

    /// Number of watched elements.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.watched
    }

    /// Watched elements in delivery order.
    pub fn watched_targets(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.registrations
            .iter()
            .filter(|r| r.state.is_watched())
            .map(|r| r.target)
    }

    /// Evaluate every watched element and return the entries to deliver.
    ///
    /// An element is reported on its first evaluation after `observe`, and
    /// afterwards only when its intersection condition differs from the last
    /// value reported.
    pub fn take_records(&mut self, layout: &dyn LayoutSource, frame: u64) -> Vec<IntersectionEntry> {
        self.maybe_compact();

        let root = self.options.root_margin.apply(layout.root_bounds());
        let threshold = self.options.threshold;
        let mut entries = Vec::new();

        for reg in &mut self.registrations {
            let WatchState::Watched { last_reported } = &mut reg.state else {
                continue;
            };
            let Some(bounds) = layout.element_bounds(reg.target) else {
                trace!(observer = self.label, target = %reg.target, "target not on page");
                continue;
            };
            let hit = Intersection::compute(bounds, root);
            let satisfied = hit.satisfies(threshold);
            if *last_reported == Some(satisfied) {
                continue;
            }
            *last_reported = Some(satisfied);
            entries.push(IntersectionEntry {
                target: reg.target,
                is_intersecting: satisfied,
                intersection_ratio: hit.ratio,
                bounding_rect: bounds,
                intersection_rect: hit.rect,
                root_bounds: root,
                frame,
            });
        }

        if !entries.is_empty() {
            trace!(
                observer = self.label,
                frame,
                entries = entries.len(),
                "records taken"
            );
        }
        entries
    }

    /// Expanded root the observer would use against `layout` right now.
    #[must_use]
    pub fn effective_root(&self, layout: &dyn LayoutSource) -> Rect {
        self.options.root_margin.apply(layout.root_bounds())
    }

    fn maybe_compact(&mut self) {
        let tombstones = self.registrations.len() - self.watched;
        if tombstones < COMPACT_MIN_TOMBSTONES || tombstones <= self.watched {
            return;
        }
        self.registrations.retain(|r| r.state.is_watched());
        self.index.clear();
        self.reindex_from(0);
        trace!(observer = self.label, tombstones, "compacted registrations");
    }

    fn reindex_from(&mut self, start: usize) {
        for (slot, reg) in self.registrations.iter().enumerate().skip(start) {
            self.index.insert(reg.target, slot);
        }
    }
}
