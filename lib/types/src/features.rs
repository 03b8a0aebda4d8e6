#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

use crate::Type;

/// Controls which proposal value types are recognized in signatures.
/// Features usually have a corresponding [WebAssembly proposal].
///
/// The four numeric types (`i32`, `i64`, `f32`, `f64`) are always
/// available.
///
/// [WebAssembly proposal]: https://github.com/WebAssembly/proposals
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "enable-serde", serde(default))]
pub struct Features {
    /// Reference Types proposal should be enabled
    pub reference_types: bool,
    /// SIMD proposal should be enabled
    pub simd: bool,
    /// Wasm exceptions proposal should be enabled
    pub exceptions: bool,
}

impl Features {
    /// Create a new feature set with the default proposals enabled.
    pub fn new() -> Self {
        Self {
            // Reference types should be on by default
            reference_types: true,
            // SIMD should be on by default
            simd: true,
            exceptions: false,
        }
    }

    /// Create a new feature set with all features enabled.
    pub fn all() -> Self {
        Self {
            reference_types: true,
            simd: true,
            exceptions: true,
        }
    }

    /// Create a new feature set with all features disabled.
    pub fn none() -> Self {
        Self {
            reference_types: false,
            simd: false,
            exceptions: false,
        }
    }

    /// Configures whether the WebAssembly reference types proposal will be
    /// enabled.
    ///
    /// This feature gates the `externref` and `funcref` (`anyfunc`) tokens.
    ///
    /// This is `true` by default.
    pub fn reference_types(&mut self, enable: bool) -> &mut Self {
        self.reference_types = enable;
        self
    }

    /// Configures whether the WebAssembly SIMD proposal will be
    /// enabled.
    ///
    /// This feature gates the `v128` token.
    ///
    /// This is `true` by default.
    pub fn simd(&mut self, enable: bool) -> &mut Self {
        self.simd = enable;
        self
    }

    /// Configures whether the WebAssembly exception-handling proposal will
    /// be enabled.
    ///
    /// This feature gates the `exnref` token.
    ///
    /// This is `false` by default.
    pub fn exceptions(&mut self, enable: bool) -> &mut Self {
        self.exceptions = enable;
        self
    }

    /// Returns whether the given value type may appear in a signature
    /// under this feature set.
    pub fn supports(&self, ty: Type) -> bool {
        match ty {
            Type::I32 | Type::I64 | Type::F32 | Type::F64 => true,
            Type::V128 => self.simd,
            Type::ExternRef | Type::FuncRef => self.reference_types,
            Type::ExceptionRef => self.exceptions,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_features {
    use super::*;

    #[test]
    fn default_features() {
        let default = Features::default();
        assert_eq!(
            default,
            Features {
                reference_types: true,
                simd: true,
                exceptions: false,
            }
        );
    }

    #[test]
    fn enable_exceptions() {
        let mut features = Features::new();
        features.exceptions(true);
        assert!(features.exceptions);
        assert!(features.supports(Type::ExceptionRef));
    }

    #[test]
    fn numeric_types_ignore_features() {
        let none = Features::none();
        for ty in [Type::I32, Type::I64, Type::F32, Type::F64] {
            assert!(none.supports(ty), "{ty} should always be supported");
        }
        assert!(!none.supports(Type::V128));
        assert!(!none.supports(Type::ExternRef));
        assert!(!none.supports(Type::FuncRef));
        assert!(!none.supports(Type::ExceptionRef));
    }

    #[test]
    fn all_enables_every_type() {
        let all = Features::all();
        assert!(Type::ALL.iter().all(|ty| all.supports(*ty)));
    }

    #[test]
    fn setters_chain() {
        let mut features = Features::none();
        features.simd(true).reference_types(true);
        assert!(features.supports(Type::V128));
        assert!(features.supports(Type::FuncRef));
        assert!(!features.supports(Type::ExceptionRef));
    }
}
