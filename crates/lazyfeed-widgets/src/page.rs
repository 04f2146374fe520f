#![forbid(unsafe_code)]

//! The host page: container, layout and viewport together.

use lazyfeed_core::{ElementId, Rect};
use lazyfeed_runtime::{LayoutSource, Viewport};

use crate::container::CardContainer;
use crate::layout::FeedLayout;

/// Everything the observers look at.
#[derive(Debug, Clone)]
pub struct Page {
    container: CardContainer,
    layout: FeedLayout,
    viewport: Viewport,
}

impl Page {
    #[must_use]
    pub fn new(container: CardContainer, layout: FeedLayout, viewport: Viewport) -> Self {
        Self {
            container,
            layout,
            viewport,
        }
    }

    #[must_use]
    pub fn container(&self) -> &CardContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut CardContainer {
        &mut self.container
    }

    #[must_use]
    pub fn layout(&self) -> &FeedLayout {
        &self.layout
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn content_height(&self) -> u32 {
        self.layout.content_height(self.container.len())
    }

    pub fn scroll_by(&mut self, delta: i64) -> u32 {
        let content = self.content_height();
        self.viewport.scroll_by(delta, content)
    }

    pub fn scroll_to(&mut self, offset: u32) -> u32 {
        let content = self.content_height();
        self.viewport.scroll_to(offset, content)
    }

    pub fn scroll_to_bottom(&mut self) -> u32 {
        self.scroll_to(u32::MAX)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let content = self.content_height();
        self.viewport.resize(width, height, content);
    }
}

impl LayoutSource for Page {
    fn root_bounds(&self) -> Rect {
        self.viewport.bounds()
    }

    fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        let position = self.container.position(id)?;
        Some(self.layout.card_bounds(
            position,
            self.viewport.width(),
            self.viewport.scroll_offset(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new(
            CardContainer::with_texts(["a", "b", "c", "d", "e"]),
            FeedLayout::default(),
            Viewport::new(40, 24),
        )
    }

    #[test]
    fn element_bounds_track_scroll() {
        let mut p = page();
        let third = p.container().at(2).unwrap().id();
        assert_eq!(p.element_bounds(third), Some(Rect::new(0, 15, 40, 6)));
        p.scroll_by(5);
        assert_eq!(p.element_bounds(third), Some(Rect::new(0, 10, 40, 6)));
    }

    #[test]
    fn unknown_element_has_no_bounds() {
        let p = page();
        assert_eq!(p.element_bounds(ElementId::new(999)), None);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut p = page();
        // 5 cards: 2 + 30 + 4 = 36 rows of content, 24 visible.
        assert_eq!(p.scroll_to_bottom(), 12);
    }
}
