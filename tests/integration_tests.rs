use jsondoc::{
    from_reader, from_slice, from_str, json, to_string, to_string_pretty, to_value, to_writer,
    Array, Error, JsonOptions, Object, Value, ValueType,
};
use serde::Serialize;

#[derive(Serialize)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize)]
struct Order {
    order_id: u32,
    items: Vec<Product>,
    note: Option<String>,
}

#[test]
fn test_nested_document_roundtrip() {
    let text = r#"{
        "order": 12345,
        "customer": {"name": "Alice", "vip": true},
        "items": [
            {"sku": "WIDGET-001", "price": 29.99, "qty": 2},
            {"sku": "GADGET-002", "price": 49.990, "qty": 1}
        ],
        "coupon": null
    }"#;

    let value = from_str(text).unwrap();
    let minified = to_string(&value);
    assert_eq!(
        minified,
        r#"{"order":12345,"customer":{"name":"Alice","vip":true},"items":[{"sku":"WIDGET-001","price":29.99,"qty":2},{"sku":"GADGET-002","price":49.990,"qty":1}],"coupon":null}"#
    );

    assert_eq!(from_str(&minified).unwrap(), value);
    assert_eq!(from_str(&to_string_pretty(&value)).unwrap(), value);
}

#[test]
fn test_rendering_is_idempotent() {
    let value = json!({"a": [1, 2.50, {"b": null}], "c": "d\"e"});
    let once = to_string(&value);
    let twice = to_string(&from_str(&once).unwrap());
    assert_eq!(once, twice);

    let once = to_string_pretty(&value);
    let twice = to_string_pretty(&from_str(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn test_pretty_layout() {
    let value = json!({"name": "x", "list": [1, []], "obj": {}});
    assert_eq!(
        to_string_pretty(&value),
        "{\n  \"name\": \"x\",\n  \"list\": [\n    1,\n    []\n  ],\n  \"obj\": {}\n}"
    );
}

#[test]
fn test_overwrite_preserves_position() {
    let mut value = from_str(r#"{"a": 1, "b": 2, "c": 3}"#).unwrap();
    value.as_object_mut().unwrap().set("b", "x");
    assert_eq!(to_string(&value), r#"{"a":1,"b":"x","c":3}"#);
}

#[test]
fn test_array_contains_cross_variant() {
    let value = from_str("[3.0, 4, \"5\"]").unwrap();
    let arr = value.as_array().unwrap();
    assert!(arr.contains(&3));
    assert!(arr.contains(&4.0));
    assert!(!arr.contains(&5));
    assert!(arr.contains("5"));
}

#[test]
fn test_array_bounds() {
    let empty = Array::new();
    assert_eq!(
        empty.get(0).unwrap_err(),
        Error::IndexOutOfRange { index: 0, len: 0 }
    );

    let value = from_str("[1, 2, 3]").unwrap();
    let arr = value.as_array().unwrap();
    assert!(matches!(
        arr.get(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        arr.get(usize::MAX),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_malformed_inputs() {
    for input in ["", "[", "{\"a\"}", "[1 2]", "tru", "\"abc", "{1: 2}", "[01]"] {
        match from_str(input) {
            Err(Error::Malformed { line, column, .. }) => {
                assert!(line >= 1 && column >= 1, "bad position for {:?}", input);
            }
            other => panic!("expected malformed for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_custom_depth_limit() {
    let options = JsonOptions::new().with_max_depth(2);
    assert!(jsondoc::de::parse_str("[[1]]", &options).is_ok());
    assert!(jsondoc::de::parse_str("[[[1]]]", &options).is_err());
}

#[test]
fn test_from_slice_reader_writer() {
    let bytes = br#"{"k": [true, false]}"#;
    let a = from_slice(bytes).unwrap();
    let b = from_reader(&bytes[..]).unwrap();
    assert_eq!(a, b);

    let mut out = Vec::new();
    to_writer(&mut out, &a).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), r#"{"k":[true,false]}"#);

    assert!(matches!(
        from_slice(b"[\"\xc3\"]"),
        Err(Error::Malformed { offset: 2, .. })
    ));
}

#[test]
fn test_to_value_from_struct() {
    let order = Order {
        order_id: 7,
        items: vec![Product {
            sku: "A".to_string(),
            price: 9.99,
            quantity: 3,
        }],
        note: None,
    };

    let value = to_value(&order).unwrap();
    assert_eq!(
        to_string(&value),
        r#"{"order_id":7,"items":[{"sku":"A","price":9.99,"quantity":3}],"note":null}"#
    );
    let price = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
    let price = price.get(0).unwrap().as_object().unwrap().get("price").unwrap();
    assert_eq!(price.to_number::<f64>().unwrap(), 9.99);
}

#[test]
fn test_serde_json_interop() {
    let value = json!({"a": [1, 2.5, null], "b": "text", "c": true});
    let via_serde_json = serde_json::to_string(&value).unwrap();
    assert_eq!(via_serde_json, r#"{"a":[1,2.5,null],"b":"text","c":true}"#);

    let back: Value = serde_json::from_str(&via_serde_json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_serde_rejects_numbers_without_exact_form() {
    let precise = from_str("[0.1000000000000000000001]").unwrap();
    let err = serde_json::to_string(&precise).unwrap_err();
    assert!(err.to_string().contains("0.1000000000000000000001"));

    let wide = from_str("123456789012345678901234567890123456789012").unwrap();
    let err = serde_json::to_string(&wide).unwrap_err();
    assert!(err
        .to_string()
        .contains("123456789012345678901234567890123456789012"));

    let fits = from_str("[340282366920938463463374607431768211455, 0.1]").unwrap();
    assert_eq!(
        serde_json::to_string(&fits).unwrap(),
        "[340282366920938463463374607431768211455,0.1]"
    );
}

#[test]
fn test_value_type_tags() {
    let value = from_str(r#"[null, true, "s", 1, 1.0, [], {}]"#).unwrap();
    let tags: Vec<ValueType> = value
        .as_array()
        .unwrap()
        .iter()
        .map(Value::value_type)
        .collect();
    assert_eq!(
        tags,
        vec![
            ValueType::Null,
            ValueType::Boolean,
            ValueType::String,
            ValueType::Integer,
            ValueType::Decimal,
            ValueType::Array,
            ValueType::Object,
        ]
    );
}

#[test]
fn test_binary_strings() {
    let value = Value::from_binary(&[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(to_string(&value), r#""deadbeef""#);
    let parsed = from_str(r#""DEADBEEF""#).unwrap();
    assert_eq!(parsed.binary_value().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(
        from_str(r#""zz""#).unwrap().binary_value(),
        Err(Error::NonBinaryString)
    );
}

#[test]
fn test_object_iteration_order() {
    let mut obj = Object::new();
    for key in ["zeta", "alpha", "mid"] {
        obj.set(key, key.len());
    }
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
    let value = Value::from(obj);
    assert_eq!(to_string(&value), r#"{"zeta":4,"alpha":5,"mid":3}"#);
}
