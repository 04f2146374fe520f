#![forbid(unsafe_code)]

//! Widgets: the card feed.
//!
//! # Role in lazyfeed
//! This crate models the page (an append-only [`CardContainer`] stacked by a
//! [`FeedLayout`] under a scrollable viewport) and the two behaviors built on
//! intersection observation:
//!
//! - [`RevealObserver`]: toggles a card's revealed state as it crosses the
//!   reveal threshold, then stops watching it.
//! - [`PaginationObserver`]: watches the last card and, when it nears the
//!   viewport, has the [`CardBatchGenerator`] append a batch before handing
//!   the watch to the new last card.
//!
//! [`Feed`] owns all of it and drives frames; [`FeedView`] draws the
//! viewport as text.

pub mod card;
pub mod config;
pub mod container;
pub mod feed;
pub mod generator;
pub mod layout;
pub mod page;
pub mod pagination;
pub mod reveal;
pub mod view;

pub use card::{Card, CardClass};
pub use config::{ConfigError, FeedConfig};
pub use container::CardContainer;
pub use feed::{Feed, FeedError, FeedStats, FrameReport, SettleReport};
pub use generator::CardBatchGenerator;
pub use layout::FeedLayout;
pub use page::Page;
pub use pagination::{BatchReport, PaginationObserver};
pub use reveal::{RevealObserver, RevealOutcome};
pub use view::FeedView;
