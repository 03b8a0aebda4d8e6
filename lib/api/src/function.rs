use std::fmt;
use std::sync::Arc;

use hostfn_types::{Features, FunctionType};

use crate::callable::{Callable, HostFunction};
use crate::convert::to_wasm_value;
use crate::descriptor::{descriptor_from_function_type, function_type_from_descriptor};
use crate::error::{RuntimeError, TypeError};
use crate::host_value::{HostValue, UNDEFINED};
use crate::value::Value;

/// A host callable wrapped together with a WebAssembly function signature.
///
/// A `Function` is only ever built from a valid signature and a callable
/// target; construction either returns a complete wrapper or a
/// [`TypeError`].
///
/// Cloning is cheap: clones share the signature and the target handle.
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

struct FunctionInner {
    ty: FunctionType,
    target: Callable,
}

impl Function {
    /// Creates a new `Function` from a type descriptor and a target, using
    /// the default [`Features`].
    ///
    /// The descriptor must be an object with `parameters` and `results`
    /// sequences of type names, and the target must be callable. The
    /// target is not called.
    ///
    /// # Example
    ///
    /// ```
    /// # use hostfn::{Function, HostFunction, HostValue, Object};
    /// let descriptor: Object = [
    ///     ("parameters", HostValue::from(vec!["i32", "i32"])),
    ///     ("results", HostValue::from(vec!["i32"])),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let addxy = HostFunction::named("addxy", |args| match (&args[0], &args[1]) {
    ///     (HostValue::Number(x), HostValue::Number(y)) => Ok(HostValue::Number(x + y)),
    ///     _ => Ok(HostValue::Undefined),
    /// });
    ///
    /// let fun = Function::new(&descriptor.into(), &addxy.into()).unwrap();
    /// assert!(Function::is_instance(&fun.into()));
    /// ```
    pub fn new(descriptor: &HostValue, target: &HostValue) -> Result<Self, TypeError> {
        Self::new_with_features(&Features::default(), descriptor, target)
    }

    /// Creates a new `Function`, recognizing the value types enabled in
    /// `features`.
    pub fn new_with_features(
        features: &Features,
        descriptor: &HostValue,
        target: &HostValue,
    ) -> Result<Self, TypeError> {
        let ty = function_type_from_descriptor(features, descriptor)?;
        let Some(target) = target.as_callable() else {
            return Err(TypeError::new(format!(
                "the function to wrap must be callable, got {}",
                target.type_of()
            )));
        };
        Ok(Self::from_parts(ty, target.clone()))
    }

    /// Creates a new `Function` from an already typed signature.
    ///
    /// # Example
    ///
    /// ```
    /// # use hostfn::{Function, FunctionType, HostFunction, HostValue, Type, Value};
    /// let signature = FunctionType::new(vec![Type::I32, Type::I32], vec![Type::I32]);
    ///
    /// let f = Function::new_typed(&signature, HostFunction::new(|args| {
    ///     match (&args[0], &args[1]) {
    ///         (HostValue::Number(x), HostValue::Number(y)) => Ok(HostValue::Number(x + y)),
    ///         _ => Ok(HostValue::Undefined),
    ///     }
    /// }));
    /// let results = f.call(&[HostValue::from(1), HostValue::from(2)]).unwrap();
    /// assert_eq!(results[..], [Value::I32(3)]);
    /// ```
    pub fn new_typed(ty: &FunctionType, func: HostFunction) -> Self {
        Self::from_parts(ty.clone(), Callable::Host(func))
    }

    fn from_parts(ty: FunctionType, target: Callable) -> Self {
        tracing::trace!(signature = %ty, %target, "wrapping host callable");
        Self {
            inner: Arc::new(FunctionInner { ty, target }),
        }
    }

    /// Returns true if `value` is a `Function`.
    pub fn is_instance(value: &HostValue) -> bool {
        matches!(value, HostValue::Function(Callable::Wasm(_)))
    }

    /// Returns the signature of this function.
    pub fn ty(&self) -> &FunctionType {
        &self.inner.ty
    }

    /// Returns the descriptor `{parameters, results}` of this function,
    /// with canonical type names.
    pub fn type_descriptor(&self) -> HostValue {
        descriptor_from_function_type(self.ty())
    }

    /// The wrapped callable.
    pub fn target(&self) -> &Callable {
        &self.inner.target
    }

    /// Returns the number of parameters that this function takes.
    pub fn param_arity(&self) -> usize {
        self.ty().params().len()
    }

    /// Returns the number of results this function produces.
    pub fn result_arity(&self) -> usize {
        self.ty().results().len()
    }

    /// Returns true if both handles refer to the same wrapper.
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Call the function.
    ///
    /// Arguments are coerced to the parameter types (missing ones read as
    /// `undefined`, extra ones are dropped) and handed to the target. The
    /// target's return value is coerced to the result types: it is ignored
    /// when there are no results, and must be an array of the right length
    /// when there are several.
    pub fn call(&self, args: &[HostValue]) -> Result<Box<[Value]>, RuntimeError> {
        let ty = self.ty();
        let host_args = ty
            .params()
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let arg = args.get(index).unwrap_or(&UNDEFINED);
                to_wasm_value(*param, arg)?.to_host_value()
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(signature = %ty, args = host_args.len(), "calling host callable");
        let ret = self.target().invoke(&host_args)?;

        Ok(results_from_host(ty, &ret)?)
    }
}

fn results_from_host(ty: &FunctionType, ret: &HostValue) -> Result<Box<[Value]>, TypeError> {
    match ty.results() {
        [] => Ok(Box::default()),
        [single] => Ok(vec![to_wasm_value(*single, ret)?].into_boxed_slice()),
        many => {
            let elements = ret.as_sequence().ok_or_else(|| {
                TypeError::new(format!(
                    "a function with {} results must return an array, got {}",
                    many.len(),
                    ret.type_of()
                ))
            })?;
            if elements.len() != many.len() {
                return Err(TypeError::new(format!(
                    "expected {} results, got {}",
                    many.len(),
                    elements.len()
                )));
            }
            many.iter()
                .zip(elements)
                .map(|(ty, element)| to_wasm_value(*ty, element))
                .collect()
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("ty", self.ty())
            .field("target", self.target())
            .finish()
    }
}
