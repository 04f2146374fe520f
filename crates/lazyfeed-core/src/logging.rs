#![forbid(unsafe_code)]

//! Tracing re-exports.
//!
//! With the `tracing` feature on, the usual macros are re-exported at the
//! crate root so downstream crates can log without naming `tracing`
//! themselves. With it off, this module is empty.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
