#![forbid(unsafe_code)]

//! The feed: page, reveal observer and pagination observer wired together.
//!
//! # Frames
//!
//! A frame is one delivery round. Observers run in creation order: the
//! reveal observer takes its records and handles them, then the pagination
//! observer does the same. Cards appended during a frame are evaluated for
//! the first time in the next one.
//!
//! [`Feed::settle`] runs frames until one delivers nothing, up to the
//! configured cap.

use std::fmt;

use lazyfeed_core::ElementId;
use lazyfeed_runtime::IntersectionEntry;
use tracing::{debug, info, warn};

use crate::card::CardClass;
use crate::config::{ConfigError, FeedConfig};
use crate::container::CardContainer;
use crate::pagination::{BatchReport, PaginationObserver};
use crate::page::Page;
use crate::reveal::{RevealObserver, RevealOutcome};

/// Errors from building a [`Feed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// The container holds no cards, so there is no sentinel to watch.
    NoInitialCards,
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::NoInitialCards => write!(f, "feed needs at least one initial card"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::NoInitialCards => None,
        }
    }
}

impl From<ConfigError> for FeedError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// What happened in one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub reveal_entries: usize,
    /// Cards the reveal observer reported this frame, in delivery order.
    pub reveal_targets: Vec<ElementId>,
    pub pagination_entries: usize,
    pub reveal: RevealOutcome,
    pub batch: Option<BatchReport>,
}

impl FrameReport {
    /// Total entries delivered across both observers.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.reveal_entries + self.pagination_entries
    }
}

/// Result of [`Feed::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleReport {
    /// Frames run, including the final empty one.
    pub frames: u32,
    /// Whether a frame delivered nothing before the cap was hit.
    pub quiescent: bool,
    /// Batches generated while settling.
    pub batches: u32,
}

/// Running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub frames: u64,
    pub batches: u64,
    pub cards_generated: u64,
    pub reveals: u64,
    pub hides: u64,
}

/// A card feed with scroll reveal and infinite pagination.
#[derive(Debug, Clone)]
pub struct Feed {
    page: Page,
    reveal: RevealObserver,
    pagination: PaginationObserver,
    frame: u64,
    max_settle_frames: u32,
    stats: FeedStats,
}

impl Feed {
    /// Build a feed from configuration.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        config.validate()?;
        let page = Page::new(
            CardContainer::with_texts(config.initial_cards.iter().cloned()),
            config.layout.into(),
            config.viewport.into(),
        );
        Self::from_parts(
            page,
            RevealObserver::new(config.reveal.observer_options()),
            PaginationObserver::new(
                config.pagination.observer_options(),
                config.pagination.generator(),
            ),
            config.max_settle_frames,
        )
    }

    /// Wire pre-built parts together: the last card becomes the sentinel
    /// and every card is watched for reveal.
    pub fn from_parts(
        page: Page,
        mut reveal: RevealObserver,
        mut pagination: PaginationObserver,
        max_settle_frames: u32,
    ) -> Result<Self, FeedError> {
        let container = page.container();
        if container.is_empty() {
            warn!("feed built without initial cards");
            return Err(FeedError::NoInitialCards);
        }
        pagination.attach(container);
        for id in container.query_by_class(CardClass::CARD) {
            reveal.watch(id);
        }
        info!(
            cards = container.len(),
            sentinel = ?pagination.sentinel(),
            "feed ready"
        );
        Ok(Self {
            page,
            reveal,
            pagination,
            frame: 0,
            max_settle_frames: max_settle_frames.max(1),
            stats: FeedStats::default(),
        })
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn container(&self) -> &CardContainer {
        self.page.container()
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    #[must_use]
    pub fn pagination(&self) -> &PaginationObserver {
        &self.pagination
    }

    /// Current pagination sentinel.
    #[must_use]
    pub fn sentinel(&self) -> Option<ElementId> {
        self.pagination.sentinel()
    }

    /// Number of frames run so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn stats(&self) -> FeedStats {
        self.stats
    }

    pub fn scroll_by(&mut self, delta: i64) -> u32 {
        self.page.scroll_by(delta)
    }

    pub fn scroll_to(&mut self, offset: u32) -> u32 {
        self.page.scroll_to(offset)
    }

    pub fn scroll_to_bottom(&mut self) -> u32 {
        self.page.scroll_to_bottom()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.page.resize(width, height);
    }

    /// Run one frame against the current geometry.
    pub fn run_frame(&mut self) -> FrameReport {
        let frame = self.frame + 1;
        let reveal_entries = self.reveal.take_records(&self.page, frame);
        let pagination_entries = self.pagination.take_records(&self.page, frame);
        self.dispatch_frame(frame, &reveal_entries, &pagination_entries)
    }

    /// Deliver externally computed batches as one frame.
    pub fn dispatch(
        &mut self,
        reveal_entries: &[IntersectionEntry],
        pagination_entries: &[IntersectionEntry],
    ) -> FrameReport {
        let frame = self.frame + 1;
        self.dispatch_frame(frame, reveal_entries, pagination_entries)
    }

    /// Run frames until one delivers nothing or the cap is reached.
    pub fn settle(&mut self) -> SettleReport {
        let mut report = SettleReport {
            frames: 0,
            quiescent: false,
            batches: 0,
        };
        while report.frames < self.max_settle_frames {
            let frame = self.run_frame();
            report.frames += 1;
            if frame.batch.is_some() {
                report.batches += 1;
            }
            if frame.delivered() == 0 {
                report.quiescent = true;
                break;
            }
        }
        if !report.quiescent {
            warn!(frames = report.frames, "settle hit frame cap");
        }
        report
    }

    fn dispatch_frame(
        &mut self,
        frame: u64,
        reveal_entries: &[IntersectionEntry],
        pagination_entries: &[IntersectionEntry],
    ) -> FrameReport {
        self.frame = frame;
        let reveal = self
            .reveal
            .handle(reveal_entries, self.page.container_mut());
        let batch = self.pagination.handle(
            pagination_entries,
            self.page.container_mut(),
            &mut self.reveal,
        );

        self.stats.frames += 1;
        self.stats.reveals += reveal.revealed as u64;
        self.stats.hides += reveal.hidden as u64;
        if let Some(b) = &batch {
            self.stats.batches += 1;
            self.stats.cards_generated += b.appended.len() as u64;
        }

        let report = FrameReport {
            frame,
            reveal_entries: reveal_entries.len(),
            reveal_targets: reveal_entries.iter().map(|e| e.target).collect(),
            pagination_entries: pagination_entries.len(),
            reveal,
            batch,
        };
        if report.delivered() > 0 {
            debug!(
                frame,
                reveal_entries = report.reveal_entries,
                pagination_entries = report.pagination_entries,
                cards = self.page.container().len(),
                "frame delivered"
            );
        }
        report
    }
}
