use std::fmt;

use hostfn_types::Type;

use crate::error::TypeError;
use crate::function::Function;
use crate::host_value::HostValue;

/// WebAssembly computations manipulate values of basic value types:
/// * Integers (32 or 64 bit width)
/// * Floating-point (32 or 64 bit width)
/// * Vectors (128 bits, with 32 or 64 bit lanes)
/// * References to host data or to functions
///
/// Spec: <https://webassembly.github.io/spec/core/exec/runtime.html#values>
#[derive(Clone, PartialEq)]
pub enum Value {
    /// A 32-bit integer.
    ///
    /// In Wasm integers are sign-agnostic, i.e. this can either be signed or unsigned.
    I32(i32),

    /// A 64-bit integer.
    ///
    /// In Wasm integers are sign-agnostic, i.e. this can either be signed or unsigned.
    I64(i64),

    /// A 32-bit float.
    F32(f32),

    /// A 64-bit float.
    F64(f64),

    /// An `externref` value which can hold opaque host data.
    ExternRef(Option<HostValue>),

    /// A first-class reference to a function wrapper.
    FuncRef(Option<Function>),

    /// A 128-bit number
    V128(u128),
}

macro_rules! accessors {
    ($bind:ident $(($variant:ident($ty:ty) $get:ident $unwrap:ident $cvt:expr))*) => ($(
        /// Attempt to access the underlying value of this `Value`, returning
        /// `None` if it is not the correct type.
        pub fn $get(&self) -> Option<$ty> {
            if let Self::$variant($bind) = self {
                Some($cvt)
            } else {
                None
            }
        }

        /// Returns the underlying value of this `Value`, panicking if it's the
        /// wrong type.
        ///
        /// # Panics
        ///
        /// Panics if `self` is not of the right type.
        pub fn $unwrap(&self) -> $ty {
            self.$get().expect(concat!("expected ", stringify!($ty)))
        }
    )*)
}

impl Value {
    /// Returns a null `externref` value.
    pub fn null() -> Self {
        Self::ExternRef(None)
    }

    /// Returns the corresponding [`Type`] for this `Value`.
    pub fn ty(&self) -> Type {
        match self {
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::ExternRef(_) => Type::ExternRef,
            Self::FuncRef(_) => Type::FuncRef,
            Self::V128(_) => Type::V128,
        }
    }

    /// Converts the value back to a host value.
    ///
    /// `i64` values become big integers, the other numbers become host
    /// numbers. `v128` has no host representation.
    pub fn to_host_value(&self) -> Result<HostValue, TypeError> {
        match self {
            Self::I32(i) => Ok(HostValue::Number((*i).into())),
            Self::I64(i) => Ok(HostValue::BigInt(*i)),
            Self::F32(f) => Ok(HostValue::Number((*f).into())),
            Self::F64(f) => Ok(HostValue::Number(*f)),
            Self::ExternRef(None) | Self::FuncRef(None) => Ok(HostValue::Null),
            Self::ExternRef(Some(value)) => Ok(value.clone()),
            Self::FuncRef(Some(func)) => Ok(func.clone().into()),
            Self::V128(_) => Err(TypeError::new("v128 values cannot be passed to the host")),
        }
    }

    accessors! {
        e
        (I32(i32) i32 unwrap_i32 *e)
        (I64(i64) i64 unwrap_i64 *e)
        (F32(f32) f32 unwrap_f32 *e)
        (F64(f64) f64 unwrap_f64 *e)
        (ExternRef(&Option<HostValue>) externref unwrap_externref e)
        (FuncRef(&Option<Function>) funcref unwrap_funcref e)
        (V128(u128) v128 unwrap_v128 *e)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "I32({v:?})"),
            Self::I64(v) => write!(f, "I64({v:?})"),
            Self::F32(v) => write!(f, "F32({v:?})"),
            Self::F64(v) => write!(f, "F64({v:?})"),
            Self::ExternRef(None) => write!(f, "Null ExternRef"),
            Self::ExternRef(Some(v)) => write!(f, "ExternRef({v:?})"),
            Self::FuncRef(None) => write!(f, "Null FuncRef"),
            Self::FuncRef(Some(v)) => write!(f, "FuncRef({v:?})"),
            Self::V128(v) => write!(f, "V128({v:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::ExternRef(_) => write!(f, "externref"),
            Self::FuncRef(_) => write!(f, "funcref"),
            Self::V128(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_for_value {
    ($($native:ty => $variant:ident),*) => {
        $(
            impl From<$native> for Value {
                fn from(val: $native) -> Self {
                    Self::$variant(val)
                }
            }
        )*
    };
}

impl_from_for_value! {
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    u128 => V128
}

impl From<Function> for Value {
    fn from(val: Function) -> Self {
        Self::FuncRef(Some(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_i32_from_i32() {
        let value = Value::from(42i32);
        assert_eq!(value.ty(), Type::I32);
        assert_eq!(value.i32(), Some(42));
        assert_eq!(value.i64(), None);
    }

    #[test]
    fn test_value_to_host_value() {
        assert_eq!(Value::I32(-1).to_host_value(), Ok(HostValue::Number(-1.0)));
        assert_eq!(Value::I64(1 << 40).to_host_value(), Ok(HostValue::BigInt(1 << 40)));
        assert_eq!(Value::F32(0.5).to_host_value(), Ok(HostValue::Number(0.5)));
        assert_eq!(Value::null().to_host_value(), Ok(HostValue::Null));
        assert_eq!(
            Value::ExternRef(Some(HostValue::from("data"))).to_host_value(),
            Ok(HostValue::from("data"))
        );
        assert!(Value::V128(1).to_host_value().is_err());
    }
}
