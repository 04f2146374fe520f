#![forbid(unsafe_code)]

//! lazyfeed demo library.
//!
//! Exposes argument parsing and the scripted scroll run so the binary stays
//! a thin shell and both can be tested without a terminal.

pub mod cli;
pub mod script;
