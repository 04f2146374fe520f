#![forbid(unsafe_code)]

//! Root margins in CSS margin shorthand.
//!
//! A root margin grows (or shrinks) the observation root before intersections
//! are computed. It is written the way CSS writes `margin`:
//!
//! | Values | Meaning                         |
//! |--------|---------------------------------|
//! | 1      | all four edges                  |
//! | 2      | vertical, horizontal            |
//! | 3      | top, horizontal, bottom         |
//! | 4      | top, right, bottom, left        |
//!
//! Each value carries a `px` or `%` unit. Percentages resolve against the
//! root's height for top/bottom and its width for left/right.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Sides};

/// One edge of a root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    /// Absolute offset in cells.
    Px(f64),
    /// Fraction of the root extent along the edge's axis, in percent.
    Percent(f64),
}

impl MarginLength {
    /// Resolve to cells against the axis extent of the root.
    #[must_use]
    pub fn resolve(self, extent: u32) -> i32 {
        let cells = match self {
            Self::Px(px) => px,
            Self::Percent(pct) => f64::from(extent) * pct / 100.0,
        };
        cells
            .round()
            .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}

impl Default for MarginLength {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

impl FromStr for MarginLength {
    type Err = MarginParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (number, ctor): (&str, fn(f64) -> Self) = if let Some(n) = token.strip_suffix("px") {
            (n, Self::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            (n, Self::Percent)
        } else {
            return Err(MarginParseError::MissingUnit(token.to_string()));
        };
        let value: f64 = number
            .parse()
            .map_err(|_| MarginParseError::InvalidNumber(token.to_string()))?;
        if !value.is_finite() {
            return Err(MarginParseError::InvalidNumber(token.to_string()));
        }
        Ok(ctor(value))
    }
}

/// Errors from parsing a root margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarginParseError {
    /// No values at all.
    Empty,
    /// More than four values.
    TooManyValues(usize),
    /// A value without `px` or `%`.
    MissingUnit(String),
    /// The numeric part did not parse.
    InvalidNumber(String),
}

impl fmt::Display for MarginParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "root margin is empty"),
            Self::TooManyValues(n) => write!(f, "root margin has {n} values, at most 4 allowed"),
            Self::MissingUnit(token) => {
                write!(f, "root margin value {token:?} must be in pixels or percent")
            }
            Self::InvalidNumber(token) => write!(f, "root margin value {token:?} is not a number"),
        }
    }
}

impl std::error::Error for MarginParseError {}

/// Four-sided root margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    /// Margin of zero on every edge.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Same pixel offset on every edge.
    #[must_use]
    pub fn uniform_px(px: f64) -> Self {
        let len = MarginLength::Px(px);
        Self {
            top: len,
            right: len,
            bottom: len,
            left: len,
        }
    }

    /// Pixel offsets in CSS order.
    #[must_use]
    pub fn px(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: MarginLength::Px(top),
            right: MarginLength::Px(right),
            bottom: MarginLength::Px(bottom),
            left: MarginLength::Px(left),
        }
    }

    /// Resolve against a root rectangle.
    #[must_use]
    pub fn resolve(&self, root: Rect) -> Sides {
        Sides::new(
            self.top.resolve(root.height),
            self.right.resolve(root.width),
            self.bottom.resolve(root.height),
            self.left.resolve(root.width),
        )
    }

    /// Root rectangle grown by this margin.
    #[must_use]
    pub fn apply(&self, root: Rect) -> Rect {
        root.expand(self.resolve(root))
    }
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(str::parse::<MarginLength>)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [] => return Err(MarginParseError::Empty),
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            more => return Err(MarginParseError::TooManyValues(more.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MarginParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_applies_to_all_edges() {
        let m: RootMargin = "100px".parse().unwrap();
        assert_eq!(m, RootMargin::uniform_px(100.0));
    }

    #[test]
    fn four_values_in_css_order() {
        let m: RootMargin = "0px 0px 50px 0px".parse().unwrap();
        assert_eq!(m, RootMargin::px(0.0, 0.0, 50.0, 0.0));
    }

    #[test]
    fn two_and_three_value_shorthand() {
        let m: RootMargin = "10px 20px".parse().unwrap();
        assert_eq!(m, RootMargin::px(10.0, 20.0, 10.0, 20.0));

        let m: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(m, RootMargin::px(1.0, 2.0, 3.0, 2.0));
    }

    #[test]
    fn percent_resolves_against_axis() {
        let m: RootMargin = "50% 10%".parse().unwrap();
        let sides = m.resolve(Rect::from_size(200, 20));
        assert_eq!(sides, Sides::new(10, 20, 10, 20));
    }

    #[test]
    fn negative_values_allowed() {
        let m: RootMargin = "-5px".parse().unwrap();
        assert_eq!(m.resolve(Rect::from_size(10, 10)), Sides::all(-5));
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginParseError::Empty));
        assert_eq!("   ".parse::<RootMargin>(), Err(MarginParseError::Empty));
        assert_eq!(
            "1px 2px 3px 4px 5px".parse::<RootMargin>(),
            Err(MarginParseError::TooManyValues(5))
        );
        assert_eq!(
            "10".parse::<RootMargin>(),
            Err(MarginParseError::MissingUnit("10".into()))
        );
        assert_eq!(
            "abcpx".parse::<RootMargin>(),
            Err(MarginParseError::InvalidNumber("abcpx".into()))
        );
        assert_eq!(
            "infpx".parse::<RootMargin>(),
            Err(MarginParseError::InvalidNumber("infpx".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        let m: RootMargin = "0px 0px 50px 0px".parse().unwrap();
        assert_eq!(m.to_string(), "0px 0px 50px 0px");
        assert_eq!(m.to_string().parse::<RootMargin>().unwrap(), m);
    }

    #[test]
    fn apply_grows_root() {
        let m = RootMargin::uniform_px(100.0);
        assert_eq!(
            m.apply(Rect::from_size(40, 24)),
            Rect::new(-100, -100, 240, 224)
        );
    }
}
