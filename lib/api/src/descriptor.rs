//! Reading function type descriptors (`{parameters: [...], results: [...]}`)
//! out of host values, and writing them back for type reflection.

use hostfn_types::{Features, FunctionType, Type};

use crate::error::TypeError;
use crate::host_value::{HostValue, Object};

const PARAMETERS: &str = "parameters";
const RESULTS: &str = "results";

/// Validates a descriptor and builds the [`FunctionType`] it describes.
///
/// Checks run in a fixed order and the first failure wins:
/// the `parameters` sequence, the `results` sequence, that every element of
/// both is a string, and finally that every string names a type enabled in
/// `features`.
pub fn function_type_from_descriptor(
    features: &Features,
    descriptor: &HostValue,
) -> Result<FunctionType, TypeError> {
    let Some(object) = descriptor.as_object() else {
        return Err(TypeError::new(format!(
            "function type descriptor must be an object, got {}",
            descriptor.type_of()
        )));
    };

    let params = sequence(object, PARAMETERS)?;
    let results = sequence(object, RESULTS)?;

    let params = tokens(PARAMETERS, params)?;
    let results = tokens(RESULTS, results)?;

    let params = value_types(features, PARAMETERS, &params)?;
    let results = value_types(features, RESULTS, &results)?;

    Ok(FunctionType::new(params, results))
}

/// Builds the descriptor that reflects `ty`, using canonical type tokens.
pub fn descriptor_from_function_type(ty: &FunctionType) -> HostValue {
    let list = |types: &[Type]| {
        HostValue::Array(
            types
                .iter()
                .map(|ty| HostValue::from(ty.token()))
                .collect(),
        )
    };
    let mut object = Object::new();
    object.insert(PARAMETERS, list(ty.params()));
    object.insert(RESULTS, list(ty.results()));
    HostValue::Object(object)
}

fn sequence<'a>(object: &'a Object, member: &str) -> Result<&'a [HostValue], TypeError> {
    let value = object.get(member);
    if value.is_undefined() {
        return Err(TypeError::new(format!(
            "function type descriptor is missing the required `{member}` member"
        )));
    }
    value.as_sequence().ok_or_else(|| {
        TypeError::new(format!(
            "`{member}` must be a sequence of type names, got {}",
            value.type_of()
        ))
    })
}

fn tokens<'a>(member: &str, elements: &'a [HostValue]) -> Result<Vec<&'a str>, TypeError> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element.as_str().ok_or_else(|| {
                TypeError::new(format!(
                    "`{member}[{index}]` must be a type name string, got {}",
                    element.type_of()
                ))
            })
        })
        .collect()
}

fn value_types(features: &Features, member: &str, tokens: &[&str]) -> Result<Vec<Type>, TypeError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            Type::from_token(token)
                .filter(|ty| features.supports(*ty))
                .ok_or_else(|| {
                    TypeError::new(format!(
                        "`{member}[{index}]` is not a recognized value type: {token:?}"
                    ))
                })
        })
        .collect()
}
