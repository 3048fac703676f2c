/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Any other token tree is converted
/// with `Value::from`, so negative numbers and other multi-token expressions
/// need parentheses: `json!([(-1), (a + b)])`.
///
/// ```rust
/// use jsondoc::json;
///
/// let enabled = true;
/// let value = json!({
///     "name": "svc",
///     "ports": [80, 443],
///     "tls": enabled,
///     "ratio": 0.25,
///     "parent": null
/// });
/// assert_eq!(
///     value.to_json_string(),
///     r#"{"name":"svc","ports":[80,443],"tls":true,"ratio":0.25,"parent":null}"#
/// );
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Boolean(true)
    };

    (false) => {
        $crate::Value::Boolean(false)
    };

    ([]) => {
        $crate::Value::Array($crate::Array::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {{
        let mut array = $crate::Array::new();
        $(
            array.add($crate::json!($elem));
        )*
        $crate::Value::Array(array)
    }};

    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Object::new();
        $(
            object.set($key, $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
