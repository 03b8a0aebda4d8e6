use std::fmt;

use indexmap::IndexMap;

use crate::callable::{Callable, HostFunction};
use crate::function::Function;

/// A dynamically typed value owned by the host.
///
/// This is the tagged counterpart of the values a scripting host passes
/// around: descriptors, targets and call arguments are all `HostValue`s.
/// Capability checks (`is_string`, `is_callable`, ...) are plain matches
/// over the variants.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum HostValue {
    /// The absence of a value. Reading a missing property yields this.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An arbitrary precision integer, limited to the `i64` range.
    BigInt(i64),
    /// A string.
    String(String),
    /// An ordered sequence.
    Array(Vec<HostValue>),
    /// A plain data object. Never callable.
    Object(Object),
    /// Something that can be called.
    Function(Callable),
}

pub(crate) static UNDEFINED: HostValue = HostValue::Undefined;

impl HostValue {
    /// Returns true if the value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if the value can be called.
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns true if the value is `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this value is a sequence.
    pub fn as_sequence(&self) -> Option<&[HostValue]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the property map, if this is a plain object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the callable, if this value can be called.
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Reads a property of a plain object. Missing properties, and
    /// properties of anything that is not a plain object, read as
    /// `undefined`.
    pub fn get(&self, property: &str) -> &HostValue {
        self.as_object()
            .map(|object| object.get(property))
            .unwrap_or(&UNDEFINED)
    }

    /// The `typeof`-style name of the value's kind.
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Null | Self::Array(_) | Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Self::Object(object) => {
                write!(f, "{{")?;
                for (i, (key, value)) in object.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                if object.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            }
            Self::Function(callable) => write!(f, "{callable}"),
        }
    }
}

/// An insertion-ordered property map.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Object {
    properties: IndexMap<String, HostValue>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<HostValue>,
    ) -> Option<HostValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Reads a property. Missing properties read as `undefined`.
    pub fn get(&self, key: &str) -> &HostValue {
        self.properties.get(key).unwrap_or(&UNDEFINED)
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HostValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<HostValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for HostValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for HostValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for HostValue {
    fn from(n: i64) -> Self {
        Self::BigInt(n)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(elements: Vec<T>) -> Self {
        Self::Array(elements.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for HostValue {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Callable> for HostValue {
    fn from(callable: Callable) -> Self {
        Self::Function(callable)
    }
}

impl From<HostFunction> for HostValue {
    fn from(func: HostFunction) -> Self {
        Self::Function(Callable::Host(func))
    }
}

impl From<Function> for HostValue {
    fn from(func: Function) -> Self {
        Self::Function(Callable::Wasm(func))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for HostValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(elements) => Self::Array(elements.into_iter().map(Self::from).collect()),
            Json::Object(map) => Self::Object(map.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_properties_are_undefined() {
        let object: Object = [("parameters", HostValue::from(Vec::<HostValue>::new()))]
            .into_iter()
            .collect();
        let value = HostValue::from(object);
        assert!(value.get("parameters").as_sequence().is_some());
        assert!(value.get("results").is_undefined());
        assert!(HostValue::Number(1.0).get("results").is_undefined());
    }

    #[test]
    fn type_of_names() {
        assert_eq!(HostValue::Null.type_of(), "object");
        assert_eq!(HostValue::Object(Object::new()).type_of(), "object");
        assert_eq!(HostValue::from(72).type_of(), "number");
        assert_eq!(HostValue::from(true).type_of(), "boolean");
        assert_eq!(HostValue::from("i32").type_of(), "string");
        let f = HostFunction::new(|_| Ok(HostValue::Undefined));
        assert_eq!(HostValue::from(f).type_of(), "function");
    }

    #[test]
    fn only_functions_are_callable() {
        let values = [
            HostValue::Undefined,
            HostValue::Null,
            HostValue::from(72),
            HostValue::from("f"),
            HostValue::Array(vec![]),
            HostValue::Object(Object::new()),
        ];
        for value in values {
            assert!(!value.is_callable(), "{value} must not be callable");
        }
        let f = HostFunction::new(|_| Ok(HostValue::Undefined));
        assert!(HostValue::from(f).is_callable());
    }

    #[test]
    fn display() {
        let object: Object = [
            ("parameters", HostValue::from(vec!["i32", "i32"])),
            ("results", HostValue::Array(vec![HostValue::from(true)])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            HostValue::from(object).to_string(),
            r#"{ parameters: ["i32", "i32"], results: [true] }"#
        );
        assert_eq!(HostValue::Object(Object::new()).to_string(), "{}");
    }

    #[cfg(feature = "json")]
    #[test]
    fn from_json() {
        let value = HostValue::from(serde_json::json!({
            "parameters": [1],
            "results": [true, null, "f64"]
        }));
        assert_eq!(
            value.get("parameters"),
            &HostValue::Array(vec![HostValue::Number(1.0)])
        );
        assert_eq!(
            value.get("results"),
            &HostValue::Array(vec![
                HostValue::Boolean(true),
                HostValue::Null,
                HostValue::from("f64"),
            ])
        );
    }
}
