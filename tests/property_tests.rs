//! Property-based tests for the round-trip and numeric laws.
//!
//! Documents are generated as arbitrary value trees, including integers past
//! 64 bits and decimals with positive, zero and negative scales.

use jsondoc::{from_str, to_string, to_string_pretty, Array, Decimal, Object, Value};
use num_bigint::BigInt;
use proptest::prelude::*;

fn arb_integer() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        any::<i64>().prop_map(BigInt::from),
        any::<i128>().prop_map(|n| BigInt::from(n) * BigInt::from(u64::MAX)),
    ]
}

fn arb_decimal() -> impl Strategy<Value = Decimal> {
    (arb_integer(), -30i64..30).prop_map(|(unscaled, scale)| Decimal::new(unscaled, scale))
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<String>().prop_map(Value::String),
        arb_integer().prop_map(Value::Integer),
        arb_decimal().prop_map(Value::Decimal),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8)
                .prop_map(|items| Value::Array(items.into_iter().collect::<Array>())),
            prop::collection::vec((any::<String>(), inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_minified_roundtrip(value in arb_value()) {
        let text = to_string(&value);
        let back = from_str(&text).unwrap();
        prop_assert_eq!(&back, &value);
        prop_assert_eq!(to_string(&back), text);
    }

    #[test]
    fn prop_pretty_roundtrip(value in arb_value()) {
        let text = to_string_pretty(&value);
        let back = from_str(&text).unwrap();
        prop_assert_eq!(&back, &value);
        prop_assert_eq!(to_string_pretty(&back), text);
    }

    #[test]
    fn prop_variant_survives_roundtrip(value in arb_value()) {
        let back = from_str(&to_string(&value)).unwrap();
        prop_assert_eq!(back.value_type(), value.value_type());
    }

    #[test]
    fn prop_i32_narrowing_is_exact(n in any::<i64>()) {
        let value = Value::from(n);
        match i32::try_from(n) {
            Ok(expected) => prop_assert_eq!(value.to_number::<i32>().unwrap(), expected),
            Err(_) => prop_assert!(value.to_number::<i32>().unwrap_err().is_precision_loss()),
        }
    }

    #[test]
    fn prop_unsigned_rejects_negative(n in i64::MIN..0) {
        prop_assert!(Value::from(n).to_number::<u64>().is_err());
        prop_assert!(Value::from(n).to_number::<u128>().is_err());
    }

    #[test]
    fn prop_f64_roundtrips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let value = Value::from(x);
        prop_assert_eq!(value.to_number::<f64>().unwrap(), x);
    }

    #[test]
    fn prop_trailing_zeros_do_not_change_value(unscaled in any::<i32>(), scale in 0i64..12) {
        let a = Decimal::new(BigInt::from(unscaled), scale);
        let b = Decimal::new(BigInt::from(unscaled) * 10, scale + 1);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(Value::Decimal(a), Value::Decimal(b));
    }

    #[test]
    fn prop_decimal_order_matches_integer_order(a in any::<i64>(), b in any::<i64>()) {
        let da = Decimal::new(BigInt::from(a) * 1000, 3);
        let db = Decimal::new(BigInt::from(b), 0);
        prop_assert_eq!(da.cmp(&db), a.cmp(&b));
    }

    #[test]
    fn prop_hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let value = Value::from_binary(&bytes);
        let encoded = value.as_str().unwrap();
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert!(!encoded.bytes().any(|b| b.is_ascii_uppercase()));
        let upper = Value::from(encoded.to_ascii_uppercase());
        prop_assert_eq!(upper.binary_value().unwrap(), bytes.clone());
        prop_assert_eq!(value.binary_value().unwrap(), bytes);
    }
}
