//! Coercions between host values and WebAssembly values.
//!
//! These follow the `ToWebAssemblyValue` algorithm of the WebAssembly JS
//! API. Compound values (arrays, objects, functions) have no primitive
//! form here and coerce to `NaN` where a number is expected.

use hostfn_types::Type;

use crate::callable::Callable;
use crate::error::TypeError;
use crate::host_value::HostValue;
use crate::value::Value;

/// Coerces a host value to a WebAssembly value of type `ty`.
pub fn to_wasm_value(ty: Type, value: &HostValue) -> Result<Value, TypeError> {
    match ty {
        Type::I32 => Ok(Value::I32(to_int32(to_number(value)?))),
        Type::I64 => Ok(Value::I64(to_big_int64(value)?)),
        Type::F32 => Ok(Value::F32(to_number(value)? as f32)),
        Type::F64 => Ok(Value::F64(to_number(value)?)),
        Type::ExternRef => match value {
            HostValue::Null => Ok(Value::ExternRef(None)),
            other => Ok(Value::ExternRef(Some(other.clone()))),
        },
        Type::FuncRef => match value {
            HostValue::Null => Ok(Value::FuncRef(None)),
            HostValue::Function(Callable::Wasm(func)) => Ok(Value::FuncRef(Some(func.clone()))),
            other => Err(TypeError::new(format!(
                "funcref expects null or a wrapped function, got {}",
                other.type_of()
            ))),
        },
        Type::V128 | Type::ExceptionRef => Err(TypeError::new(format!(
            "values of type {} cannot cross the host boundary",
            ty.token()
        ))),
    }
}

/// `ToNumber`.
pub fn to_number(value: &HostValue) -> Result<f64, TypeError> {
    match value {
        HostValue::Undefined => Ok(f64::NAN),
        HostValue::Null => Ok(0.0),
        HostValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        HostValue::Number(n) => Ok(*n),
        HostValue::BigInt(_) => Err(TypeError::new("cannot convert a BigInt to a number")),
        HostValue::String(s) => Ok(string_to_number(s)),
        HostValue::Array(_) | HostValue::Object(_) | HostValue::Function(_) => Ok(f64::NAN),
    }
}

/// `ToInt32`: truncate, then wrap modulo 2^32.
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
    if wrapped >= 2_147_483_648.0 {
        (wrapped - 4_294_967_296.0) as i32
    } else {
        wrapped as i32
    }
}

/// `ToBigInt64`. Numbers are rejected, as they are for `BigInt` itself.
pub fn to_big_int64(value: &HostValue) -> Result<i64, TypeError> {
    match value {
        HostValue::BigInt(i) => Ok(*i),
        HostValue::Boolean(b) => Ok(i64::from(*b)),
        HostValue::String(s) => string_to_big_int(s)
            .ok_or_else(|| TypeError::new(format!("cannot convert {s:?} to a BigInt"))),
        other => Err(TypeError::new(format!(
            "cannot convert {} to a BigInt",
            other.type_of()
        ))),
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some((radix, digits)) = split_radix_prefix(s) {
        return digit_values(digits, radix).map_or(f64::NAN, |values| {
            values.fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
        });
    }
    // Rust accepts `inf`, `nan` and friends, which are not numeric literals.
    if s.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses an integer literal, keeping only its low 64 bits
/// (`BigInt.asIntN(64)`).
fn string_to_big_int(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0);
    }
    let (negative, radix, digits) = match split_radix_prefix(s) {
        Some((radix, digits)) => (false, radix, digits),
        None => match s.strip_prefix('-') {
            Some(digits) => (true, 10, digits),
            None => (false, 10, s.strip_prefix('+').unwrap_or(s)),
        },
    };
    let magnitude = digit_values(digits, radix)?.fold(0u64, |acc, d| {
        acc.wrapping_mul(u64::from(radix)).wrapping_add(u64::from(d))
    });
    let wrapped = magnitude as i64;
    Some(if negative { wrapped.wrapping_neg() } else { wrapped })
}

/// Splits a `0x`, `0o` or `0b` literal into its radix and digits.
fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// The value of each digit, or `None` if `digits` is empty or holds
/// anything that isn't a digit in `radix`.
fn digit_values(digits: &str, radix: u32) -> Option<impl Iterator<Item = u32> + '_> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    Some(digits.chars().filter_map(move |c| c.to_digit(radix)))
}
