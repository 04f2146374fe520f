#![forbid(unsafe_code)]

//! Core: geometry, root margins, and intersection math.
//!
//! # Role in lazyfeed
//! `lazyfeed-core` is the pure layer. It knows nothing about cards or
//! observers; it answers "does this rectangle satisfy the intersection
//! condition against that root?" and parses the CSS-style root margins used
//! to grow the root.
//!
//! # How it fits in the system
//! `lazyfeed-runtime` builds the intersection observer on top of these
//! types, and `lazyfeed-widgets` supplies the page geometry the observer
//! queries.

pub mod element;
pub mod geometry;
pub mod intersection;
pub mod logging;
pub mod margin;

pub use element::{ElementId, ElementIdAllocator};
pub use geometry::{Rect, Sides};
pub use intersection::{Intersection, Threshold, ThresholdError};
pub use margin::{MarginLength, MarginParseError, RootMargin};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
