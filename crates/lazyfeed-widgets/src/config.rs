#![forbid(unsafe_code)]

//! Feed configuration loaded from TOML or JSON.
//!
//! Every field has a default, so an empty document yields the stock feed:
//! reveal at 80% visibility with a 50-row bottom margin, paginate 100 rows
//! ahead, 10 "New Card" placeholders per batch.

use std::fmt;
use std::path::Path;

use lazyfeed_core::{RootMargin, Threshold};
use lazyfeed_runtime::{ObserverOptions, Viewport};
use serde::{Deserialize, Serialize};

use crate::generator::{CardBatchGenerator, DEFAULT_BATCH_SIZE, DEFAULT_PLACEHOLDER_TEXT};
use crate::layout::FeedLayout;

/// Errors from loading or validating a [`FeedConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// Malformed TOML (including invalid margins or thresholds).
    Toml(String),
    /// Malformed JSON (including invalid margins or thresholds).
    Json(String),
    /// File extension is neither `.toml` nor `.json`.
    UnsupportedFormat(String),
    /// A value parsed but is not usable.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Toml(msg) => write!(f, "TOML config error: {msg}"),
            Self::Json(msg) => write!(f, "JSON config error: {msg}"),
            Self::UnsupportedFormat(path) => {
                write!(f, "unsupported config format: {path} (expected .toml or .json)")
            }
            Self::Invalid { field, reason } => write!(f, "invalid config value {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: Threshold,
    pub root_margin: RootMargin,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::clamped(0.8),
            root_margin: RootMargin::px(0.0, 0.0, 50.0, 0.0),
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::new()
            .with_threshold(self.threshold)
            .with_root_margin(self.root_margin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub threshold: Threshold,
    pub root_margin: RootMargin,
    pub batch_size: usize,
    pub placeholder_text: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::ZERO,
            root_margin: RootMargin::uniform_px(100.0),
            batch_size: DEFAULT_BATCH_SIZE,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
        }
    }
}

impl PaginationConfig {
    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::new()
            .with_threshold(self.threshold)
            .with_root_margin(self.root_margin)
    }

    #[must_use]
    pub fn generator(&self) -> CardBatchGenerator {
        CardBatchGenerator::new(self.batch_size, self.placeholder_text.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_height: u32,
    pub gap: u32,
    pub padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let layout = FeedLayout::default();
        Self {
            card_height: layout.card_height,
            gap: layout.gap,
            padding: layout.padding,
        }
    }
}

impl From<LayoutConfig> for FeedLayout {
    fn from(c: LayoutConfig) -> Self {
        Self {
            card_height: c.card_height,
            gap: c.gap,
            padding: c.padding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 24,
        }
    }
}

impl From<ViewportConfig> for Viewport {
    fn from(c: ViewportConfig) -> Self {
        Viewport::new(c.width, c.height)
    }
}

/// Full feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Texts of the cards present at page load.
    pub initial_cards: Vec<String>,
    /// Upper bound on frames run by a single settle.
    pub max_settle_frames: u32,
    pub reveal: RevealConfig,
    pub pagination: PaginationConfig,
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            initial_cards: (1..=5).map(|n| format!("Card {n}")).collect(),
            max_settle_frames: 64,
            reveal: RevealConfig::default(),
            pagination: PaginationConfig::default(),
            layout: LayoutConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Reject values the feed cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.card_height == 0 {
            return Err(ConfigError::Invalid {
                field: "layout.card_height",
                reason: "must be at least 1",
            });
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid {
                field: "viewport",
                reason: "width and height must be at least 1",
            });
        }
        if self.pagination.batch_size == 0 {
            return Err(ConfigError::Invalid {
                field: "pagination.batch_size",
                reason: "must be at least 1",
            });
        }
        if self.max_settle_frames == 0 {
            return Err(ConfigError::Invalid {
                field: "max_settle_frames",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Toml(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_documents_yield_defaults() {
        assert_eq!(FeedConfig::from_toml_str("").unwrap(), FeedConfig::default());
        assert_eq!(FeedConfig::from_json_str("{}").unwrap(), FeedConfig::default());
    }

    #[test]
    fn defaults_match_stock_feed() {
        let c = FeedConfig::default();
        assert_eq!(c.reveal.threshold.get(), 0.8);
        assert_eq!(c.reveal.root_margin.to_string(), "0px 0px 50px 0px");
        assert_eq!(c.pagination.root_margin.to_string(), "100px 100px 100px 100px");
        assert_eq!(c.pagination.batch_size, 10);
        assert_eq!(c.pagination.placeholder_text, "New Card");
        assert_eq!(c.initial_cards.len(), 5);
    }

    #[test]
    fn toml_overrides() {
        let c = FeedConfig::from_toml_str(
            r#"
            initial_cards = ["one", "two"]

            [reveal]
            threshold = 0.5
            root_margin = "10px"

            [pagination]
            batch_size = 3
            "#,
        )
        .unwrap();
        assert_eq!(c.initial_cards, vec!["one", "two"]);
        assert_eq!(c.reveal.threshold.get(), 0.5);
        assert_eq!(c.reveal.root_margin, RootMargin::uniform_px(10.0));
        assert_eq!(c.pagination.batch_size, 3);
        assert_eq!(c.pagination.placeholder_text, "New Card");
    }

    #[test]
    fn bad_threshold_is_a_parse_error() {
        let err = FeedConfig::from_json_str(r#"{"reveal": {"threshold": 2.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn bad_margin_is_a_parse_error() {
        let err = FeedConfig::from_toml_str("[pagination]\nroot_margin = \"100\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn validation_rejects_unusable_values() {
        let err = FeedConfig::from_toml_str("[layout]\ncard_height = 0").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "layout.card_height",
                reason: "must be at least 1",
            }
        );
        assert!(FeedConfig::from_toml_str("[pagination]\nbatch_size = 0").is_err());
        assert!(FeedConfig::from_toml_str("[viewport]\nheight = 0").is_err());
        assert!(FeedConfig::from_toml_str("max_settle_frames = 0").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let c = FeedConfig::default();
        let text = c.to_toml_string().unwrap();
        assert_eq!(FeedConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("feed.toml");
        std::fs::write(&toml_path, "[viewport]\nheight = 10").unwrap();
        assert_eq!(FeedConfig::load(&toml_path).unwrap().viewport.height, 10);

        let json_path = dir.path().join("feed.json");
        std::fs::write(&json_path, r#"{"viewport": {"width": 20}}"#).unwrap();
        assert_eq!(FeedConfig::load(&json_path).unwrap().viewport.width, 20);

        let other = dir.path().join("feed.yaml");
        std::fs::write(&other, "").unwrap();
        assert!(matches!(
            FeedConfig::load(&other),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            FeedConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
