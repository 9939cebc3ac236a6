/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// Objects keep their keys in the order written, which is the order the
/// elements are rendered in. Anything that is not `null`, `true`, `false`,
/// an array or an object is converted with [`to_value`](crate::to_value).
///
/// # Panics
///
/// Panics if an embedded expression cannot be converted, for example a map
/// with sequence keys. Use [`to_value`](crate::to_value) to handle that error.
///
/// ```rust
/// use serde_dictxml::{dict, to_string};
///
/// let data = dict!({
///     "name": "Alice",
///     "roles": ["admin", "dev"],
///     "manager": null
/// });
/// let xml = to_string(&data, "user").unwrap();
/// assert!(xml.ends_with(
///     "<user ><name>Alice</name><roles>admin</roles><roles>dev</roles><manager></manager></user>"
/// ));
/// ```
#[macro_export]
macro_rules! dict {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::dict!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::XmlMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::XmlMap::new();
        $(
            object.insert($key.to_string(), $crate::dict!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression
    ($s:expr) => {{
        match $crate::to_value(&$s) {
            Ok(value) => value,
            Err(err) => panic!("dict!: cannot convert `{}`: {}", stringify!($s), err),
        }
    }};
}
