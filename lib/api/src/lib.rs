#![deny(
    missing_docs,
    trivial_numeric_casts,
    unused_extern_crates,
    rustdoc::broken_intra_doc_links
)]
#![warn(unused_import_braces)]
#![warn(
    clippy::mut_mut,
    clippy::nonminimal_bool,
    clippy::map_unwrap_or,
    clippy::print_stdout,
    clippy::unicode_not_nfc,
    clippy::use_self
)]

//! `hostfn` wraps host callables together with a WebAssembly function
//! signature, the way the `WebAssembly.Function` constructor of the
//! WebAssembly JS API does.
//!
//! A [`Function`] is built from a *descriptor*, a host object of the form
//! `{parameters: [...], results: [...]}` whose elements are type names
//! such as `"i32"` or `"externref"`, and a callable *target*. Construction
//! validates both and either returns a complete wrapper or a single kind of
//! error, [`TypeError`].
//!
//! # Usage
//!
//! ```rust
//! use hostfn::{Function, HostFunction, HostValue, Value};
//!
//! fn main() -> anyhow::Result<()> {
//!     let descriptor = HostValue::from(serde_json::json!({
//!         "parameters": ["i32", "i32"],
//!         "results": ["i32"],
//!     }));
//!     let addxy = HostFunction::named("addxy", |args| match (&args[0], &args[1]) {
//!         (HostValue::Number(x), HostValue::Number(y)) => Ok(HostValue::Number(x + y)),
//!         _ => Ok(HostValue::Undefined),
//!     });
//!
//!     let fun = Function::new(&descriptor, &addxy.into())?;
//!     assert_eq!(fun.ty().to_string(), "[I32, I32] -> [I32]");
//!
//!     let result = fun.call(&[HostValue::from(40), HostValue::from(2)])?;
//!     assert_eq!(result[0], Value::I32(42));
//!
//!     // Anything else fails with the same kind of error.
//!     let missing_results = HostValue::from(serde_json::json!({ "parameters": [] }));
//!     assert!(Function::new(&missing_results, &HostValue::Number(72.0)).is_err());
//!     Ok(())
//! }
//! ```
//!
//! # Recognized type names
//!
//! `i32`, `i64`, `f32` and `f64` are always recognized. `v128`,
//! `externref`, `funcref` (also spelled `anyfunc`) and `exnref` are gated
//! by [`Features`]; see [`Function::new_with_features`].

mod callable;
pub mod convert;
mod descriptor;
mod error;
mod function;
mod host_value;
mod value;

pub use crate::callable::{Callable, HostFunction};
pub use crate::descriptor::{descriptor_from_function_type, function_type_from_descriptor};
pub use crate::error::{RuntimeError, TypeError};
pub use crate::function::Function;
pub use crate::host_value::{HostValue, Object};
pub use crate::value::Value;

pub use hostfn_types::{Features, FunctionType, ParseTypeError, Type};

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
