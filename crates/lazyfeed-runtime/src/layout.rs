#![forbid(unsafe_code)]

//! Geometry queries an observer needs from the host page.

use lazyfeed_core::{ElementId, Rect};

/// Supplies element geometry in viewport coordinates.
pub trait LayoutSource {
    /// Bounds of the observation root before any margin is applied.
    fn root_bounds(&self) -> Rect;

    /// Current bounds of `id`, or `None` if the element is not on the page.
    fn element_bounds(&self, id: ElementId) -> Option<Rect>;
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn root_bounds(&self) -> Rect {
        (**self).root_bounds()
    }

    fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        (**self).element_bounds(id)
    }
}
