//! The Hostfn binary lib

#![deny(
    missing_docs,
    dead_code,
    nonstandard_style,
    unused_mut,
    unused_variables,
    unused_unsafe,
    unreachable_patterns
)]
// Allowed because it makes code more readable.
#![allow(clippy::bool_comparison, clippy::match_like_matches_macro)]

pub mod cli;
pub mod commands;
pub mod common;
pub mod logging;

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
