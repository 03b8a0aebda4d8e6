use anyhow::Result;
use hostfn::*;
use serde_json::json;

fn identity(ty: &FunctionType) -> Function {
    Function::new_typed(
        ty,
        HostFunction::named("identity", |args| {
            Ok(args.first().cloned().unwrap_or_default())
        }),
    )
}

#[test]
fn externref_passes_host_values_through() -> Result<()> {
    let f = identity(&FunctionType::new([Type::ExternRef], [Type::ExternRef]));

    let data = HostValue::from(json!({"answer": 42}));
    let result = f.call(&[data.clone()])?;
    assert_eq!(result[..], [Value::ExternRef(Some(data))]);

    assert_eq!(f.call(&[HostValue::Null])?[..], [Value::null()]);
    Ok(())
}

#[test]
fn funcref_accepts_wrappers_and_null() -> Result<()> {
    let ty = FunctionType::new([Type::FuncRef], [Type::FuncRef]);
    let f = identity(&ty);

    let result = f.call(&[f.clone().into()])?;
    assert_eq!(result[0].unwrap_funcref().as_ref(), Some(&f));

    assert_eq!(f.call(&[HostValue::Null])?[..], [Value::FuncRef(None)]);
    Ok(())
}

#[test]
fn funcref_rejects_plain_host_functions() {
    let f = identity(&FunctionType::new([Type::FuncRef], []));
    let plain = HostFunction::new(|_| Ok(HostValue::Undefined));
    let err = f.call(&[plain.into()]).unwrap_err();
    assert!(matches!(err, RuntimeError::Type(_)), "{err}");
}

#[test]
fn funcref_built_from_descriptor() -> Result<()> {
    let descriptor = HostValue::from(json!({"parameters": ["anyfunc"], "results": []}));
    let target = HostFunction::new(|_| Ok(HostValue::Undefined));
    let f = Function::new(&descriptor, &target.into())?;
    assert_eq!(f.ty().params(), &[Type::FuncRef]);
    Ok(())
}
