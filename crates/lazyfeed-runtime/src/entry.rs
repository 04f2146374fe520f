#![forbid(unsafe_code)]

//! One element's report in an observer batch.

use lazyfeed_core::{ElementId, Rect};

/// Snapshot of a watched element at the moment its condition was reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// The watched element.
    pub target: ElementId,
    /// Whether the intersection condition holds.
    pub is_intersecting: bool,
    /// Visible fraction of the target's area.
    pub intersection_ratio: f64,
    /// Target bounds in viewport coordinates.
    pub bounding_rect: Rect,
    /// Overlap with the expanded root, `None` when disjoint.
    pub intersection_rect: Option<Rect>,
    /// The root after margin expansion.
    pub root_bounds: Rect,
    /// Frame in which the entry was produced.
    pub frame: u64,
}
