use anyhow::Result;
use hostfn::*;
use pretty_assertions::assert_eq;

fn echo(ty: FunctionType) -> Function {
    Function::new_typed(
        &ty,
        HostFunction::named("echo", |args| match args {
            [] => Ok(HostValue::Undefined),
            [single] => Ok(single.clone()),
            many => Ok(HostValue::Array(many.to_vec())),
        }),
    )
}

#[test_log::test]
fn i32_arguments_wrap() -> Result<()> {
    let f = echo(FunctionType::new([Type::I32], [Type::I32]));
    let cases = [
        (HostValue::from(7), 7),
        (HostValue::from(2_147_483_648.0), i32::MIN),
        (HostValue::from(-1.9), -1),
        (HostValue::from("12"), 12),
        (HostValue::Boolean(true), 1),
        (HostValue::Null, 0),
        (HostValue::Undefined, 0),
        (HostValue::from(f64::NAN), 0),
    ];
    for (arg, expected) in cases {
        assert_eq!(f.call(&[arg])?[..], [Value::I32(expected)]);
    }
    Ok(())
}

#[test]
fn missing_arguments_are_undefined() -> Result<()> {
    let f = echo(FunctionType::new([Type::I32, Type::F64], [Type::I32]));
    // `undefined` is NaN, which wraps to 0 for i32.
    assert_eq!(f.call(&[])?[..], [Value::I32(0)]);
    Ok(())
}

#[test]
fn extra_arguments_are_dropped() -> Result<()> {
    let seen = HostFunction::new(|args| Ok(HostValue::Number(args.len() as f64)));
    let f = Function::new_typed(&FunctionType::new([Type::F64], [Type::I32]), seen);
    let result = f.call(&[HostValue::from(1), HostValue::from(2), HostValue::from(3)])?;
    assert_eq!(result[..], [Value::I32(1)]);
    Ok(())
}

#[test]
fn i64_needs_big_ints() -> Result<()> {
    let f = echo(FunctionType::new([Type::I64], [Type::I64]));
    assert_eq!(f.call(&[HostValue::BigInt(1 << 40)])?[..], [Value::I64(1 << 40)]);
    assert_eq!(f.call(&[HostValue::from("-3")])?[..], [Value::I64(-3)]);

    let err = f.call(&[HostValue::Number(1.0)]).unwrap_err();
    assert!(matches!(err, RuntimeError::Type(_)), "{err}");
    Ok(())
}

#[test]
fn floats() -> Result<()> {
    let f = echo(FunctionType::new([Type::F32, Type::F64], [Type::F32, Type::F64]));
    let result = f.call(&[HostValue::from(0.1), HostValue::from("2.5")])?;
    assert_eq!(result[..], [Value::F32(0.1), Value::F64(2.5)]);
    Ok(())
}

#[test]
fn no_results_ignore_return_value() -> Result<()> {
    let f = Function::new_typed(
        &FunctionType::new(vec![], vec![]),
        HostFunction::new(|_| Ok(HostValue::from("ignored"))),
    );
    assert!(f.call(&[])?.is_empty());
    Ok(())
}

#[test]
fn multiple_results_need_matching_array() -> Result<()> {
    let ty = FunctionType::new(vec![], vec![Type::I32, Type::I32]);
    let pair = Function::new_typed(
        &ty,
        HostFunction::new(|_| Ok(HostValue::from(vec![HostValue::from(1), HostValue::from(2)]))),
    );
    assert_eq!(pair.call(&[])?[..], [Value::I32(1), Value::I32(2)]);

    let single = Function::new_typed(&ty, HostFunction::new(|_| Ok(HostValue::from(1))));
    assert!(single.call(&[]).is_err());

    let short = Function::new_typed(
        &ty,
        HostFunction::new(|_| Ok(HostValue::from(vec![HostValue::from(1)]))),
    );
    assert!(short.call(&[]).is_err());
    Ok(())
}

#[test]
fn host_errors_propagate() {
    let f = Function::new_typed(
        &FunctionType::new(vec![], vec![]),
        HostFunction::new(|_| Err(RuntimeError::new("boom"))),
    );
    let err = f.call(&[]).unwrap_err();
    assert_eq!(err, RuntimeError::User("boom".to_string()));
    assert_eq!(err.message(), "boom");
}

#[test]
fn v128_cannot_be_called() {
    let f = echo(FunctionType::new(vec![Type::V128], vec![]));
    let err = f.call(&[HostValue::from(1)]).unwrap_err();
    assert!(err.message().contains("v128"), "{err}");
}
