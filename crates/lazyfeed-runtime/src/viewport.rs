#![forbid(unsafe_code)]

//! Scrollable viewport over vertically stacked content.

use lazyfeed_core::{Rect, trace};

/// Visible window onto content of some height.
///
/// The scroll offset is kept in `0..=max_scroll(content_height)`. Content
/// only grows on this page, so callers pass the current content height on
/// each scroll request rather than the viewport tracking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scroll_offset: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_offset: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Viewport rectangle in its own coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Largest valid offset for the given content height.
    #[must_use]
    pub fn max_scroll(&self, content_height: u32) -> u32 {
        content_height.saturating_sub(self.height)
    }

    /// True when the last row of content is visible.
    #[must_use]
    pub fn is_at_bottom(&self, content_height: u32) -> bool {
        self.scroll_offset >= self.max_scroll(content_height)
    }

    /// Scroll to an absolute offset, clamped. Returns the applied offset.
    pub fn scroll_to(&mut self, offset: u32, content_height: u32) -> u32 {
        let clamped = offset.min(self.max_scroll(content_height));
        if clamped != self.scroll_offset {
            trace!(from = self.scroll_offset, to = clamped, "scroll");
            self.scroll_offset = clamped;
        }
        clamped
    }

    /// Scroll by a signed delta, clamped. Returns the applied offset.
    pub fn scroll_by(&mut self, delta: i64, content_height: u32) -> u32 {
        let target = (i64::from(self.scroll_offset) + delta).clamp(0, i64::from(u32::MAX));
        self.scroll_to(target as u32, content_height)
    }

    /// Change the viewport size, re-clamping the offset.
    pub fn resize(&mut self, width: u32, height: u32, content_height: u32) {
        self.width = width;
        self.height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll(content_height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_content() {
        let mut vp = Viewport::new(40, 24);
        assert_eq!(vp.scroll_to(100, 60), 36);
        assert!(vp.is_at_bottom(60));
        assert_eq!(vp.scroll_by(-50, 60), 0);
        assert_eq!(vp.scroll_by(10, 60), 10);
    }

    #[test]
    fn short_content_cannot_scroll() {
        let mut vp = Viewport::new(40, 24);
        assert_eq!(vp.max_scroll(10), 0);
        assert_eq!(vp.scroll_by(5, 10), 0);
        assert!(vp.is_at_bottom(10));
    }

    #[test]
    fn resize_reclamps() {
        let mut vp = Viewport::new(40, 10);
        vp.scroll_to(50, 60);
        vp.resize(40, 30, 60);
        assert_eq!(vp.scroll_offset(), 30);
        assert_eq!(vp.bounds(), Rect::from_size(40, 30));
    }
}
