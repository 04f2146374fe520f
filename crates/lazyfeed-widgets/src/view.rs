#![forbid(unsafe_code)]

//! Text rendering of the visible part of the page.
//!
//! Each card is drawn as a box spanning its full height. Revealed cards show
//! their text on the middle row; unrevealed cards are filled with a shade.
//! Cards one or two rows tall degrade to bracketed lines.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::card::Card;
use crate::page::Page;

const SHADE: char = '░';

/// Renders a [`Page`] into lines of exactly the viewport width.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedView {
    show_ids: bool,
}

impl FeedView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix card text with its element id.
    #[must_use]
    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    /// One string per viewport row.
    #[must_use]
    pub fn render(&self, page: &Page) -> Vec<String> {
        let _span = tracing::debug_span!(
            "FeedView::render",
            scroll = page.viewport().scroll_offset(),
            cards = page.container().len()
        )
        .entered();

        let width = page.viewport().width() as usize;
        let height = page.viewport().height();
        let layout = page.layout();
        let scroll = u64::from(page.viewport().scroll_offset());

        (0..u64::from(height))
            .map(|row| {
                layout
                    .card_at_row(scroll + row)
                    .and_then(|(pos, offset)| {
                        page.container()
                            .at(pos)
                            .map(|card| self.card_row(card, offset, layout.card_height, width))
                    })
                    .unwrap_or_else(|| " ".repeat(width))
            })
            .collect()
    }

    fn card_row(&self, card: &Card, offset: u32, card_height: u32, width: usize) -> String {
        if width < 2 {
            return fit("", width);
        }
        let inner = width - 2;
        let label = self.label(card);

        // Too short for a box: bracketed rows, label on the first.
        if card_height <= 2 {
            let body = if !card.is_revealed() {
                shade(inner)
            } else if offset == 0 {
                fit(&label, inner)
            } else {
                " ".repeat(inner)
            };
            return format!("[{body}]");
        }

        let last = card_height - 1;
        if offset == 0 {
            format!("┌{}┐", "─".repeat(inner))
        } else if offset == last {
            format!("└{}┘", "─".repeat(inner))
        } else if !card.is_revealed() {
            format!("│{}│", shade(inner))
        } else if offset == card_height / 2 {
            format!("│{}│", fit(&format!(" {label}"), inner))
        } else {
            format!("│{}│", " ".repeat(inner))
        }
    }

    fn label(&self, card: &Card) -> String {
        if self.show_ids {
            format!("{} {}", card.id(), card.text())
        } else {
            card.text().to_string()
        }
    }
}

fn shade(width: usize) -> String {
    std::iter::repeat_n(SHADE, width).collect()
}

/// Truncate by display width on grapheme boundaries, then pad with spaces.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
