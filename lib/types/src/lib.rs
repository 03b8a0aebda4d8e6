//! These are the common types for describing the signature of host
//! functions exposed to WebAssembly.
//!
//! This crate provides the closed set of value [`Type`]s, the textual
//! type tokens used by host descriptors (`"i32"`, `"externref"`, ...),
//! [`FunctionType`] and the [`Features`] that gate which tokens are
//! recognized.

#![deny(missing_docs, unused_extern_crates)]
#![warn(unused_import_braces)]

pub mod error;
mod features;
mod types;

pub use crate::error::ParseTypeError;
pub use crate::features::Features;
pub use crate::types::{FunctionType, Type};

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
