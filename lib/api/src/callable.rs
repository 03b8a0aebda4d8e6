use std::fmt;
use std::sync::Arc;

use crate::error::RuntimeError;
use crate::function::Function;
use crate::host_value::HostValue;

type HostCallback = dyn Fn(&[HostValue]) -> Result<HostValue, RuntimeError> + Send + Sync;

/// A function implemented by the host.
///
/// Cloning a `HostFunction` is cheap: clones share the same closure, and
/// [`HostFunction::same`] tells whether two handles refer to it.
///
/// # Example
///
/// ```
/// # use hostfn::{HostFunction, HostValue};
/// let add = HostFunction::named("add", |args| {
///     let sum = match (&args[0], &args[1]) {
///         (HostValue::Number(x), HostValue::Number(y)) => x + y,
///         _ => f64::NAN,
///     };
///     Ok(HostValue::Number(sum))
/// });
/// assert_eq!(add.name(), Some("add"));
/// ```
#[derive(Clone)]
pub struct HostFunction {
    name: Option<Arc<str>>,
    func: Arc<HostCallback>,
}

impl HostFunction {
    /// Creates an anonymous host function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[HostValue]) -> Result<HostValue, RuntimeError> + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Creates a named host function. The name only shows up in
    /// diagnostics.
    pub fn named<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[HostValue]) -> Result<HostValue, RuntimeError> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// The name given at creation, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Calls the closure.
    pub fn call(&self, args: &[HostValue]) -> Result<HostValue, RuntimeError> {
        (self.func)(args)
    }

    /// Returns true if both handles share the same closure.
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for HostFunction {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostFunction")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Anything that can be called with host values: a plain host function, or
/// a [`Function`] wrapper built on top of one.
#[derive(Clone, Debug, PartialEq)]
pub enum Callable {
    /// A function implemented by the host.
    Host(HostFunction),
    /// A signature-checked wrapper.
    Wasm(Function),
}

impl Callable {
    /// Calls the underlying function.
    ///
    /// A wrapper's results are converted back to host values: no result
    /// reads as `undefined`, a single result as itself, and several results
    /// as an array.
    pub fn invoke(&self, args: &[HostValue]) -> Result<HostValue, RuntimeError> {
        match self {
            Self::Host(func) => func.call(args),
            Self::Wasm(func) => {
                let results = func.call(args)?;
                match &results[..] {
                    [] => Ok(HostValue::Undefined),
                    [single] => Ok(single.to_host_value()?),
                    many => Ok(HostValue::Array(
                        many.iter()
                            .map(|value| value.to_host_value())
                            .collect::<Result<_, _>>()?,
                    )),
                }
            }
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host(func) => match func.name() {
                Some(name) => write!(f, "function {name}"),
                None => write!(f, "function"),
            },
            Self::Wasm(func) => write!(f, "function {}", func.ty()),
        }
    }
}

impl From<HostFunction> for Callable {
    fn from(func: HostFunction) -> Self {
        Self::Host(func)
    }
}

impl From<Function> for Callable {
    fn from(func: Function) -> Self {
        Self::Wasm(func)
    }
}
