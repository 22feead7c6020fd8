/// Builds a [`Value`](crate::Value) tree with document-like syntax.
///
/// Keys must be string literals. Anything that is not `null`, `true`, `false`, a list
/// or an object goes through `Value::from`. A repeated key behaves as it does in a
/// parsed document: it keeps its first slot and takes the last value.
///
/// ```rust
/// use sjson::{parse, sjson};
///
/// let built = sjson!({ "position": [0, 1, 2], "visible": true, "name": null });
/// let parsed = parse("{'position': [0, 1, 2], 'visible': true, 'name': null}").unwrap();
/// assert_eq!(built, parsed);
/// ```
#[macro_export]
macro_rules! sjson {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Boolean(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Boolean(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::sjson!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::ObjectMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ObjectMap::new();
        $(
            object.insert($key.to_string(), $crate::sjson!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Scalars and expressions
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
