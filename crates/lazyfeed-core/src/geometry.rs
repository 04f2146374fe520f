#![forbid(unsafe_code)]

//! Geometric primitives in viewport space.
//!
//! Unlike a terminal grid, viewport space is signed: an element scrolled
//! above the viewport has a negative `y`. Extents are unsigned.

/// A rectangle with a signed origin and unsigned extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    #[inline]
    #[must_use]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Left edge as a wide integer.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.x as i64
    }

    /// Top edge as a wide integer.
    #[inline]
    #[must_use]
    pub const fn top(&self) -> i64 {
        self.y as i64
    }

    /// Exclusive right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Area in square cells.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True when either extent is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Move the rectangle by the given offsets, saturating at the `i32` range.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Grow (or shrink, for negative values) each edge outward.
    ///
    /// An edge pair that would cross collapses to zero extent at the
    /// midpoint of the crossing.
    #[must_use]
    pub fn expand(&self, sides: Sides) -> Self {
        let left = self.left() - i64::from(sides.left);
        let right = self.right() + i64::from(sides.right);
        let top = self.top() - i64::from(sides.top);
        let bottom = self.bottom() + i64::from(sides.bottom);
        let (left, right) = collapse(left, right);
        let (top, bottom) = collapse(top, bottom);
        Self::from_edges(left, top, right, bottom)
    }

    /// Intersection with `other`.
    ///
    /// Edge-adjacent rectangles intersect with a zero-extent result; disjoint
    /// rectangles return `None`.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left > right || top > bottom {
            return None;
        }
        Some(Self::from_edges(left, top, right, bottom))
    }

    /// True if the two rectangles overlap or touch.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    fn from_edges(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let x = clamp(left);
        let y = clamp(top);
        Self {
            x,
            y,
            width: (right - i64::from(x)).clamp(0, i64::from(u32::MAX)) as u32,
            height: (bottom - i64::from(y)).clamp(0, i64::from(u32::MAX)) as u32,
        }
    }
}

fn collapse(start: i64, end: i64) -> (i64, i64) {
    if start <= end {
        (start, end)
    } else {
        let mid = start + (end - start) / 2;
        (mid, mid)
    }
}

/// Per-edge offsets in CSS order: top, right, bottom, left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// Create sides in CSS order.
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same offset on every edge.
    #[must_use]
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical and horizontal offsets.
    #[must_use]
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}
