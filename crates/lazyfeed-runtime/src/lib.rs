#![forbid(unsafe_code)]

//! Runtime: intersection observation and viewport scrolling.
//!
//! # Role in lazyfeed
//! This crate owns the observation primitive. An [`IntersectionObserver`]
//! keeps an explicit registration state per watched element and, when asked
//! for records, compares each element's current geometry (supplied by a
//! [`LayoutSource`]) against the margin-expanded root. Elements whose
//! intersection condition changed since the last report come back as an
//! ordered batch of [`IntersectionEntry`] values.
//!
//! # Invariants
//!
//! 1. An element is registered at most once per observer.
//! 2. A newly watched element is always reported in the next batch.
//! 3. After that, an element is reported only when its condition flips.
//! 4. Entries in a batch follow registration order.
//! 5. Unwatched elements are never reported.

pub mod entry;
pub mod layout;
pub mod observer;
pub mod viewport;

pub use entry::IntersectionEntry;
pub use layout::LayoutSource;
pub use observer::{IntersectionObserver, ObserverOptions, WatchState};
pub use viewport::Viewport;
