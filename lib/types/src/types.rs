use std::fmt;
use std::str::FromStr;

#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseTypeError;

// Value Types

/// A list of all possible value types that can appear in a host function
/// signature.
///
/// With `enable-serde`, types (de)serialize as their type tokens.
#[derive(Copy, Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "enable-serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    /// Signed 32 bit integer.
    I32,
    /// Signed 64 bit integer.
    I64,
    /// Floating point 32 bit integer.
    F32,
    /// Floating point 64 bit integer.
    F64,
    /// A 128 bit number.
    V128,
    /// A reference to opaque data owned by the host.
    ExternRef,
    /// A reference to a Wasm function.
    #[cfg_attr(feature = "enable-serde", serde(alias = "anyfunc"))]
    FuncRef,
    /// A reference to a Wasm exception.
    #[cfg_attr(feature = "enable-serde", serde(rename = "exnref"))]
    ExceptionRef,
}

impl Type {
    /// Every value type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::V128,
        Self::ExternRef,
        Self::FuncRef,
        Self::ExceptionRef,
    ];

    /// Returns true if `Type` matches any of the numeric types. (e.g. `I32`,
    /// `I64`, `F32`, `F64`, `V128`).
    pub fn is_num(self) -> bool {
        matches!(
            self,
            Self::I32 | Self::I64 | Self::F32 | Self::F64 | Self::V128
        )
    }

    /// Returns true if `Type` matches either of the reference types.
    pub fn is_ref(self) -> bool {
        matches!(self, Self::ExternRef | Self::FuncRef | Self::ExceptionRef)
    }

    /// The canonical type token for this type, as used in descriptors.
    pub fn token(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::V128 => "v128",
            Self::ExternRef => "externref",
            Self::FuncRef => "funcref",
            Self::ExceptionRef => "exnref",
        }
    }

    /// Looks up the type named by `token`.
    ///
    /// `anyfunc` is accepted as the legacy spelling of `funcref`.
    pub fn from_token(token: &str) -> Option<Self> {
        let ty = match token {
            "i32" => Self::I32,
            "i64" => Self::I64,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "v128" => Self::V128,
            "externref" => Self::ExternRef,
            "funcref" | "anyfunc" => Self::FuncRef,
            "exnref" => Self::ExceptionRef,
            _ => return None,
        };
        Some(ty)
    }
}

impl FromStr for Type {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseTypeError::new(s))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The signature of a function exposed to Wasm by the host.
///
/// Functions can have 0 or more parameters and results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct FunctionType {
    /// The parameters of the function
    #[cfg_attr(feature = "enable-serde", serde(rename = "parameters"))]
    params: Box<[Type]>,
    /// The return values of the function
    results: Box<[Type]>,
}

impl FunctionType {
    /// Creates a new Function Type with the given parameter and return types.
    pub fn new<Params, Returns>(params: Params, returns: Returns) -> Self
    where
        Params: Into<Box<[Type]>>,
        Returns: Into<Box<[Type]>>,
    {
        Self {
            params: params.into(),
            results: returns.into(),
        }
    }

    /// Parameter types.
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    /// Return types.
    pub fn results(&self) -> &[Type] {
        &self.results
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|p| format!("{p:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        let results = self
            .results
            .iter()
            .map(|p| format!("{p:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{params}] -> [{results}]")
    }
}

macro_rules! implement_from_pair_to_functiontype {
    ($($N:literal,$M:literal)+) => {
        $(
            impl From<([Type; $N], [Type; $M])> for FunctionType {
                fn from(pair: ([Type; $N], [Type; $M])) -> Self {
                    Self::new(pair.0, pair.1)
                }
            }
        )+
    }
}

implement_from_pair_to_functiontype! {
    0,0 0,1 0,2 0,3
    1,0 1,1 1,2 1,3
    2,0 2,1 2,2 2,3
    3,0 3,1 3,2 3,3
    4,0 4,1 4,2 4,3
}

impl From<&Self> for FunctionType {
    fn from(as_ref: &Self) -> Self {
        as_ref.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VOID_TO_VOID: ([Type; 0], [Type; 0]) = ([], []);
    const I32_I32_TO_I32: ([Type; 2], [Type; 1]) = ([Type::I32, Type::I32], [Type::I32]);

    #[test]
    fn convert_tuple_to_functiontype() {
        let ty: FunctionType = VOID_TO_VOID.into();
        assert_eq!(ty.params().len(), 0);
        assert_eq!(ty.results().len(), 0);

        let ty: FunctionType = I32_I32_TO_I32.into();
        assert_eq!(ty.params(), &[Type::I32, Type::I32]);
        assert_eq!(ty.results(), &[Type::I32]);
    }

    #[test]
    fn display_functiontype() {
        let ty: FunctionType = I32_I32_TO_I32.into();
        assert_eq!(ty.to_string(), "[I32, I32] -> [I32]");

        let ty = FunctionType::new(vec![], vec![Type::ExternRef, Type::F64]);
        assert_eq!(ty.to_string(), "[] -> [ExternRef, F64]");
    }

    #[test]
    fn tokens_round_trip() {
        for ty in Type::ALL {
            assert_eq!(Type::from_token(ty.token()), Some(ty));
            assert_eq!(ty.token().parse::<Type>(), Ok(ty));
        }
    }

    #[test]
    fn anyfunc_is_funcref() {
        assert_eq!(Type::from_token("anyfunc"), Some(Type::FuncRef));
        assert_eq!(Type::FuncRef.token(), "funcref");
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        for token in ["invalid", "", "I32", " i32", "i32 ", "int", "exceptionref"] {
            let err = token.parse::<Type>().unwrap_err();
            assert_eq!(err.token(), token);
        }
        assert_eq!(
            "invalid".parse::<Type>().unwrap_err().to_string(),
            "unknown value type `invalid`"
        );
    }

    #[test]
    fn num_and_ref_partition() {
        for ty in Type::ALL {
            assert_ne!(ty.is_num(), ty.is_ref(), "{ty} must be exactly one kind");
        }
    }

    #[cfg(feature = "enable-serde")]
    #[test]
    fn functiontype_serde_uses_descriptor_shape() {
        let ty: FunctionType = I32_I32_TO_I32.into();
        let json = serde_json::to_value(&ty).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"parameters": ["i32", "i32"], "results": ["i32"]})
        );

        let parsed: FunctionType = serde_json::from_value(serde_json::json!({
            "parameters": ["anyfunc", "exnref"],
            "results": []
        }))
        .unwrap();
        assert_eq!(parsed.params(), &[Type::FuncRef, Type::ExceptionRef]);
    }
}
