use serde::ser::{Serialize, SerializeMap};

use crate::{Error, Result, Value};

/// Convert a `T` to a `Value`.
///
/// The value is serialized with [`serde_json`] first, so the usual JSON
/// rules apply: non-negative integers become [`Value::Unsigned`], negative
/// ones [`Value::Integer`], enum variants with data become single entry maps
/// keyed by the variant name and map keys must serialize as strings.
///
/// # Examples
///
/// ```
/// use whisker::{to_value, Value};
///
/// #[derive(serde::Serialize)]
/// struct User { name: &'static str, age: i32 }
///
/// let value = to_value(User { name: "John", age: 42 })?;
/// assert_eq!(
///     value,
///     Value::from([("name", Value::from("John")), ("age", Value::from(42_u32))])
/// );
/// # Ok::<(), whisker::Error>(())
/// ```
pub fn to_value<T>(value: T) -> Result<Value>
where
    T: Serialize,
{
    serde_json::to_value(value)
        .map(Value::from)
        .map_err(Error::serialize)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Unsigned(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(string) => serializer.serialize_str(string),
            Value::List(list) => list.serialize(serializer),
            Value::Map(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
        }
    }
}
