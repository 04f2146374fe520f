#![forbid(unsafe_code)]

//! Intersection math between a target and an observation root.
//!
//! # Intersection condition
//!
//! A target satisfies the condition when its rectangle intersects the
//! (margin-expanded) root rectangle, edge adjacency included, and the
//! visible fraction of its area is at least the threshold. A zero-area
//! target that intersects the root has ratio 1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Visible fraction required for the intersection condition, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Any intersection, including edge adjacency.
    pub const ZERO: Self = Self(0.0);
    /// The whole target must be inside the root.
    pub const FULL: Self = Self(1.0);

    /// Validate and wrap a threshold.
    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ThresholdError(value))
        }
    }

    /// Clamp into range; NaN becomes zero.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// The raw fraction.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

/// A threshold outside `0.0..=1.0` (or NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdError(pub f64);

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "threshold {} is outside the range 0.0..=1.0", self.0)
    }
}

impl std::error::Error for ThresholdError {}

/// Geometry of one target against one root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Overlap of target and root, `None` when disjoint.
    pub rect: Option<Rect>,
    /// Visible fraction of the target's area, in `0.0..=1.0`.
    pub ratio: f64,
}

impl Intersection {
    /// Compute the overlap of `target` with `root`.
    #[must_use]
    pub fn compute(target: Rect, root: Rect) -> Self {
        let rect = target.intersection(&root);
        let ratio = match rect {
            None => 0.0,
            Some(_) if target.area() == 0 => 1.0,
            Some(hit) => hit.area() as f64 / target.area() as f64,
        };
        Self { rect, ratio }
    }

    /// Whether the rectangles touch at all.
    #[inline]
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.rect.is_some()
    }

    /// Whether the intersection condition holds for `threshold`.
    #[inline]
    #[must_use]
    pub fn satisfies(&self, threshold: Threshold) -> bool {
        self.is_touching() && self.ratio >= threshold.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_validation() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(0.8).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::new(1.5), Err(ThresholdError(1.5)));
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn clamped_threshold() {
        assert_eq!(Threshold::clamped(0.8).get(), 0.8);
        assert_eq!(Threshold::clamped(3.0), Threshold::FULL);
        assert_eq!(Threshold::clamped(-1.0), Threshold::ZERO);
        assert_eq!(Threshold::clamped(f64::NAN), Threshold::ZERO);
    }

    #[test]
    fn fully_inside() {
        let i = Intersection::compute(Rect::new(0, 2, 10, 5), Rect::from_size(40, 24));
        assert_eq!(i.ratio, 1.0);
        assert!(i.satisfies(Threshold::new(0.8).unwrap()));
    }

    #[test]
    fn partially_visible_below_threshold() {
        // 2 of 10 rows visible.
        let i = Intersection::compute(Rect::new(0, 22, 10, 10), Rect::from_size(10, 24));
        assert!((i.ratio - 0.2).abs() < 1e-9);
        assert!(i.is_touching());
        assert!(!i.satisfies(Threshold::new(0.8).unwrap()));
        assert!(i.satisfies(Threshold::ZERO));
    }

    #[test]
    fn edge_adjacent_satisfies_zero_threshold_only() {
        let i = Intersection::compute(Rect::new(0, 24, 10, 10), Rect::from_size(10, 24));
        assert_eq!(i.ratio, 0.0);
        assert!(i.satisfies(Threshold::ZERO));
        assert!(!i.satisfies(Threshold::new(0.01).unwrap()));
    }

    #[test]
    fn disjoint_never_satisfies() {
        let i = Intersection::compute(Rect::new(0, 30, 10, 10), Rect::from_size(10, 24));
        assert_eq!(i.rect, None);
        assert!(!i.satisfies(Threshold::ZERO));
    }

    #[test]
    fn zero_area_target_touching_has_full_ratio() {
        let i = Intersection::compute(Rect::new(0, 5, 10, 0), Rect::from_size(10, 24));
        assert_eq!(i.ratio, 1.0);
        assert!(i.satisfies(Threshold::FULL));
    }
}
