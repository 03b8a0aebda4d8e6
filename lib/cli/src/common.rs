//! Common module with common used structures across different
//! commands.

use clap::{Args, ValueEnum};
use hostfn::{Features, HostFunction, HostValue, Object};

#[derive(Debug, Clone, Default, Args)]
/// The WebAssembly features that can be passed through the
/// Command Line args.
pub struct WasmFeatures {
    /// Disable support for the SIMD proposal (`v128`).
    #[clap(long = "disable-simd", env = "HOSTFN_DISABLE_SIMD")]
    pub disable_simd: bool,

    /// Disable support for the reference types proposal (`externref`, `funcref`).
    #[clap(long = "disable-reference-types", env = "HOSTFN_DISABLE_REFERENCE_TYPES")]
    pub disable_reference_types: bool,

    /// Enable support for the exception handling proposal (`exnref`).
    #[clap(long = "enable-exceptions", env = "HOSTFN_ENABLE_EXCEPTIONS")]
    pub exceptions: bool,

    /// Enable support for all pre-standard proposals.
    #[clap(long = "enable-all")]
    pub all: bool,
}

impl WasmFeatures {
    /// The feature set selected on the command line.
    pub fn features(&self) -> Features {
        if self.all {
            return Features::all();
        }
        let mut features = Features::new();
        features
            .simd(!self.disable_simd)
            .reference_types(!self.disable_reference_types)
            .exceptions(self.exceptions);
        features
    }
}

/// The kind of value handed to the constructor as the function to wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TargetKind {
    /// A host function that returns `undefined`.
    #[default]
    Function,
    /// An empty plain object.
    Object,
    /// The number `72`.
    Number,
    /// A string.
    String,
    /// `null`.
    Null,
}

impl TargetKind {
    /// Builds the host value standing for this kind of target.
    pub fn host_value(self) -> HostValue {
        match self {
            Self::Function => HostFunction::named("target", |args| {
                tracing::debug!(args = args.len(), "target called");
                Ok(HostValue::Undefined)
            })
            .into(),
            Self::Object => Object::new().into(),
            Self::Number => HostValue::Number(72.0),
            Self::String => HostValue::from("target"),
            Self::Null => HostValue::Null,
        }
    }
}
