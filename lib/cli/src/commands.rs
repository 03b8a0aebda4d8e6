//! The commands available in the Hostfn binary.
mod types;
mod validate;

pub use {types::*, validate::*};
