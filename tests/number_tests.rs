use jsondoc::{from_str, Decimal, Error, Numeric, Value, ValueType};
use num_bigint::BigInt;

fn parse(text: &str) -> Value {
    from_str(text).unwrap()
}

#[test]
fn test_300_fits_only_wide_enough_targets() {
    let value = parse("300");
    assert!(value.to_number::<i8>().unwrap_err().is_precision_loss());
    assert!(value.to_number::<u8>().unwrap_err().is_precision_loss());
    assert_eq!(value.to_number::<i16>().unwrap(), 300);
    assert_eq!(value.to_number::<u16>().unwrap(), 300);
    assert_eq!(value.to_number::<i32>().unwrap(), 300);
    assert_eq!(value.to_number::<u64>().unwrap(), 300);
    assert_eq!(value.to_number::<i128>().unwrap(), 300);
    assert_eq!(value.to_number::<usize>().unwrap(), 300);
    assert_eq!(value.to_number::<f32>().unwrap(), 300.0);
}

#[test]
fn test_precision_loss_names_target() {
    let err = parse("-1").to_number::<u32>().unwrap_err();
    assert_eq!(
        err,
        Error::PrecisionLoss {
            target: "u32",
            value: "-1".to_string()
        }
    );
    assert!(err.to_string().contains("u32"));
}

#[test]
fn test_decimal_to_integer_needs_integral_value() {
    assert_eq!(parse("3.0").to_number::<i32>().unwrap(), 3);
    assert_eq!(parse("4.2e1").to_number::<u8>().unwrap(), 42);
    assert!(parse("3.5").to_number::<i64>().is_err());
    assert!(parse("1e100").to_number::<u128>().is_err());
}

#[test]
fn test_float_targets_are_exact() {
    assert_eq!(parse("0.1").to_number::<f64>().unwrap(), 0.1);
    assert_eq!(parse("2.5").to_number::<f32>().unwrap(), 2.5);
    assert_eq!(parse("1e300").to_number::<f64>().unwrap(), 1e300);
    assert!(parse("1e300").to_number::<f32>().is_err());
    assert!(parse("0.30000000000000000001").to_number::<f64>().is_err());
    assert!(parse("9007199254740993").to_number::<f64>().is_err());
    assert_eq!(
        parse("9007199254740992").to_number::<f64>().unwrap(),
        9007199254740992.0
    );
}

#[test]
fn test_widening_never_fails() {
    let big = "98765432109876543210987654321098765432109876543210";
    let value = parse(big);
    assert_eq!(
        value.to_number::<BigInt>().unwrap(),
        big.parse::<BigInt>().unwrap()
    );
    assert_eq!(
        value.to_number::<Decimal>().unwrap(),
        big.parse::<Decimal>().unwrap()
    );
    assert!(value.to_number::<i128>().is_err());

    let precise = parse("0.1000000000000000000000000000000000001");
    assert_eq!(
        precise.to_number::<Decimal>().unwrap().to_string(),
        "0.1000000000000000000000000000000000001"
    );
}

#[test]
fn test_non_numeric_is_wrong_variant() {
    let err = parse(r#""12""#).to_number::<i32>().unwrap_err();
    assert!(matches!(
        err,
        Error::WrongVariant {
            expected: "number",
            found: ValueType::String,
        }
    ));
    assert_eq!(err.to_string(), "expected number, found string");
    assert!(matches!(
        i32::try_from(&Value::Null),
        Err(Error::WrongVariant { .. })
    ));
}

#[test]
fn test_cross_variant_equality() {
    assert_eq!(parse("3"), parse("3.0"));
    assert_eq!(parse("3.0"), parse("3.000"));
    assert_eq!(parse("300"), parse("3e2"));
    assert_ne!(parse("3"), parse("3.01"));
    assert_eq!(parse("[3.0]"), parse("[3]"));
}

#[test]
fn test_numeric_view_ordering() {
    let values = parse("[2, 1.5, -7, 1e1, 0.001]");
    let mut nums: Vec<Numeric<'_>> = values
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_numeric)
        .collect();
    nums.sort();
    let rendered: Vec<String> = nums.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["-7", "0.001", "1.5", "2", "1E+1"]);
}

#[test]
fn test_scale_survives_roundtrip() {
    for text in ["1.50", "0.000", "-12.340", "1E+3", "2.5E-9"] {
        let value = parse(text);
        assert_eq!(value.to_json_string(), text, "rendering of {}", text);
    }
}

#[test]
fn test_if_numeric_sees_both_variants() {
    let mut integral = Vec::new();
    for text in ["1", "1.0", "1.5", "\"1\""] {
        parse(text).if_numeric(|n| integral.push(n.is_integral()));
    }
    assert_eq!(integral, [true, true, false]);
}

#[test]
fn test_non_finite_floats() {
    assert!(Value::from(f64::NAN).is_null());
    assert!(Value::from(f64::NEG_INFINITY).is_null());
    assert!(matches!(
        Decimal::try_from(f64::INFINITY),
        Err(Error::NonFiniteNumber(_))
    ));
}
