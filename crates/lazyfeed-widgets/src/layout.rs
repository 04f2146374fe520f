#![forbid(unsafe_code)]

//! Vertical stacking of cards inside the container.

use lazyfeed_core::Rect;

/// Fixed-height card stack with a gap between cards and padding above the
/// first and below the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLayout {
    pub card_height: u32,
    pub gap: u32,
    pub padding: u32,
}

impl Default for FeedLayout {
    fn default() -> Self {
        Self {
            card_height: 6,
            gap: 1,
            padding: 1,
        }
    }
}

impl FeedLayout {
    /// Distance from one card's top to the next card's top.
    #[must_use]
    pub fn stride(&self) -> u64 {
        u64::from(self.card_height) + u64::from(self.gap)
    }

    /// Content-space top of the card at `position`.
    #[must_use]
    pub fn card_top(&self, position: usize) -> u64 {
        u64::from(self.padding) + position as u64 * self.stride()
    }

    /// Total content height for `count` cards.
    #[must_use]
    pub fn content_height(&self, count: usize) -> u32 {
        let cards = match count {
            0 => 0,
            n => n as u64 * self.stride() - u64::from(self.gap),
        };
        (cards + 2 * u64::from(self.padding)).min(u64::from(u32::MAX)) as u32
    }

    /// Bounds of the card at `position` in viewport coordinates.
    #[must_use]
    pub fn card_bounds(&self, position: usize, width: u32, scroll_offset: u32) -> Rect {
        let top = self.card_top(position) as i64 - i64::from(scroll_offset);
        let y = top.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Rect::new(0, y, width, self.card_height)
    }

    /// Which card covers content row `row`, and the row offset inside it.
    /// Rows in the padding or in a gap return `None`.
    #[must_use]
    pub fn card_at_row(&self, row: u64) -> Option<(usize, u32)> {
        let padding = u64::from(self.padding);
        if row < padding || self.stride() == 0 {
            return None;
        }
        let rel = row - padding;
        let position = (rel / self.stride()) as usize;
        let offset = (rel % self.stride()) as u32;
        (offset < self.card_height).then_some((position, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_height_includes_gaps_and_padding() {
        let l = FeedLayout::default();
        assert_eq!(l.content_height(0), 2);
        assert_eq!(l.content_height(1), 8);
        assert_eq!(l.content_height(5), 2 + 5 * 6 + 4);
    }

    #[test]
    fn card_bounds_follow_scroll() {
        let l = FeedLayout::default();
        assert_eq!(l.card_bounds(0, 40, 0), Rect::new(0, 1, 40, 6));
        assert_eq!(l.card_bounds(2, 40, 0), Rect::new(0, 15, 40, 6));
        assert_eq!(l.card_bounds(0, 40, 10), Rect::new(0, -9, 40, 6));
    }

    #[test]
    fn card_at_row_skips_gaps() {
        let l = FeedLayout::default();
        assert_eq!(l.card_at_row(0), None);
        assert_eq!(l.card_at_row(1), Some((0, 0)));
        assert_eq!(l.card_at_row(6), Some((0, 5)));
        assert_eq!(l.card_at_row(7), None);
        assert_eq!(l.card_at_row(8), Some((1, 0)));
    }
}
