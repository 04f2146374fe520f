#![forbid(unsafe_code)]

//! Deterministic scroll script.
//!
//! The feed settles once, then each step scrolls by a fixed number of rows
//! (or jumps to the bottom) and settles again.

use lazyfeed_widgets::{Feed, FeedConfig, FeedView, SettleReport};
use serde_json::json;
use tracing::info;

use crate::cli::Opts;

/// State after one step. Step zero is the initial settle.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: u32,
    pub scroll_offset: u32,
    pub settle: SettleReport,
    pub cards: usize,
    pub revealed: usize,
    pub lines: Vec<String>,
}

/// Totals printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub steps: u32,
    pub cards: usize,
    pub revealed: usize,
    pub batches: u64,
    pub frames: u64,
}

impl Summary {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "steps": self.steps,
            "cards": self.cards,
            "revealed": self.revealed,
            "batches": self.batches,
            "frames": self.frames,
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "steps={} cards={} revealed={} batches={} frames={}",
            self.steps, self.cards, self.revealed, self.batches, self.frames
        )
    }
}

/// Fold command-line overrides into a loaded config.
pub fn apply_overrides(config: &mut FeedConfig, opts: &Opts) {
    if let Some((width, height)) = opts.viewport {
        config.viewport.width = width;
        config.viewport.height = height;
    }
    if let Some(batch_size) = opts.batch_size {
        config.pagination.batch_size = batch_size;
    }
}

/// Run the script, handing each step to `on_step`.
pub fn run(feed: &mut Feed, opts: &Opts, mut on_step: impl FnMut(&StepReport)) -> Summary {
    let view = FeedView::new().show_ids(opts.show_ids);
    let render = !opts.quiet;

    for step in 0..=opts.steps {
        if step > 0 {
            if opts.step_rows == 0 {
                feed.scroll_to_bottom();
            } else {
                feed.scroll_by(i64::from(opts.step_rows));
            }
        }
        let settle = feed.settle();
        let report = StepReport {
            step,
            scroll_offset: feed.page().viewport().scroll_offset(),
            settle,
            cards: feed.container().len(),
            revealed: feed.container().revealed_count(),
            lines: if render {
                view.render(feed.page())
            } else {
                Vec::new()
            },
        };
        info!(
            step,
            scroll = report.scroll_offset,
            frames = settle.frames,
            batches = settle.batches,
            cards = report.cards,
            revealed = report.revealed,
            "step settled"
        );
        on_step(&report);
    }

    let stats = feed.stats();
    Summary {
        steps: opts.steps,
        cards: feed.container().len(),
        revealed: feed.container().revealed_count(),
        batches: stats.batches,
        frames: stats.frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(steps: u32, step_rows: u32) -> Opts {
        Opts {
            steps,
            step_rows,
            quiet: true,
            ..Opts::default()
        }
    }

    #[test]
    fn overrides_replace_viewport_and_batch_size() {
        let mut config = FeedConfig::default();
        let opts = Opts {
            viewport: Some((60, 12)),
            batch_size: Some(3),
            ..Opts::default()
        };
        apply_overrides(&mut config, &opts);
        assert_eq!(config.viewport.width, 60);
        assert_eq!(config.viewport.height, 12);
        assert_eq!(config.pagination.batch_size, 3);
    }

    #[test]
    fn initial_step_matches_settle() {
        let mut feed = Feed::new(&FeedConfig::default()).unwrap();
        let mut steps = Vec::new();
        let summary = run(&mut feed, &quiet(0, 12), |r| steps.push(r.clone()));

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, 0);
        assert_eq!(steps[0].scroll_offset, 0);
        assert!(steps[0].lines.is_empty());
        assert_eq!(summary.cards, 25);
        assert_eq!(summary.batches, 2);
        assert_eq!(summary.revealed, 10);
    }

    #[test]
    fn bottom_jumps_always_load_more() {
        let mut feed = Feed::new(&FeedConfig::default()).unwrap();
        let mut cards = Vec::new();
        let summary = run(&mut feed, &quiet(3, 0), |r| cards.push(r.cards));

        assert_eq!(cards.len(), 4);
        assert!(cards.windows(2).all(|w| w[0] < w[1]), "{cards:?}");
        assert_eq!(summary.cards, 5 + 10 * summary.batches as usize);
    }

    #[test]
    fn rendering_fills_the_viewport() {
        let mut config = FeedConfig::default();
        config.viewport.height = 8;
        let mut feed = Feed::new(&config).unwrap();
        let opts = Opts {
            steps: 1,
            ..Opts::default()
        };
        let mut heights = Vec::new();
        run(&mut feed, &opts, |r| heights.push(r.lines.len()));
        assert_eq!(heights, vec![8, 8]);
    }

    #[test]
    fn summary_json_has_all_counters() {
        let summary = Summary {
            steps: 2,
            cards: 15,
            revealed: 4,
            batches: 1,
            frames: 7,
        };
        let value = summary.to_json();
        assert_eq!(value["cards"], 15);
        assert_eq!(value["frames"], 7);
        assert_eq!(summary.to_string(), "steps=2 cards=15 revealed=4 batches=1 frames=7");
    }
}
