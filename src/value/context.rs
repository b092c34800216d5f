use std::fmt;

use crate::value::Value;

/// The kind of a context value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    None,
    Bool,
    Integer,
    Unsigned,
    Float,
    String,
    List,
    Map,
}

/// Read-only access to a tree of JSON-like data.
///
/// The renderer only ever reads the context through this trait, so any
/// dynamically typed tree can be rendered. Implementations are provided for
/// [`Value`] and [`serde_json::Value`].
///
/// # Examples
///
/// ```
/// use whisker::{Context, Kind};
///
/// let data = serde_json::json!({ "list": [1, 2, 3] });
/// let list = data.member("list").unwrap();
/// assert_eq!(list.kind(), Kind::List);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.element(0).and_then(Context::as_u64), Some(1));
/// ```
pub trait Context {
    /// Returns the kind of this value.
    fn kind(&self) -> Kind;

    /// Lookup a member of a map by name.
    ///
    /// Returns `None` if the member does not exist or if this value is not a
    /// map.
    fn member(&self, name: &str) -> Option<&Self>;

    /// Whether this value is a map containing the member `name`.
    fn contains(&self, name: &str) -> bool {
        self.member(name).is_some()
    }

    /// The number of elements in a list, zero for any other kind.
    fn len(&self) -> usize;

    /// Whether this value is an empty list, or not a list at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element of a list at `index`.
    fn element(&self, index: usize) -> Option<&Self>;

    fn as_bool(&self) -> Option<bool>;

    fn as_i64(&self) -> Option<i64>;

    fn as_u64(&self) -> Option<u64>;

    fn as_f64(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    /// Write the compact JSON text of this value and all its descendants.
    fn write_serialized(&self, f: &mut dyn fmt::Write) -> fmt::Result;
}

impl Kind {
    /// Returns a human readable name for the kind.
    pub fn human(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Unsigned => "unsigned integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl Context for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::None => Kind::None,
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) => Kind::Integer,
            Value::Unsigned(_) => Kind::Unsigned,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
        }
    }

    fn member(&self, name: &str) -> Option<&Self> {
        match self {
            Value::Map(map) => map.get(name),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Value::List(list) => list.len(),
            _ => 0,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            Value::List(list) => list.get(index),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(i) => Some(i),
            Value::Unsigned(u) => i64::try_from(u).ok(),
            _ => None,
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Unsigned(u) => Some(u),
            Value::Integer(i) => u64::try_from(i).ok(),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            Value::Integer(i) => Some(i as f64),
            Value::Unsigned(u) => Some(u as f64),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn write_serialized(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl Context for serde_json::Value {
    fn kind(&self) -> Kind {
        match self {
            serde_json::Value::Null => Kind::None,
            serde_json::Value::Bool(_) => Kind::Bool,
            serde_json::Value::Number(n) if n.is_u64() => Kind::Unsigned,
            serde_json::Value::Number(n) if n.is_i64() => Kind::Integer,
            serde_json::Value::Number(_) => Kind::Float,
            serde_json::Value::String(_) => Kind::String,
            serde_json::Value::Array(_) => Kind::List,
            serde_json::Value::Object(_) => Kind::Map,
        }
    }

    fn member(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn len(&self) -> usize {
        self.as_array().map_or(0, Vec::len)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn as_bool(&self) -> Option<bool> {
        serde_json::Value::as_bool(self)
    }

    fn as_i64(&self) -> Option<i64> {
        serde_json::Value::as_i64(self)
    }

    fn as_u64(&self) -> Option<u64> {
        serde_json::Value::as_u64(self)
    }

    fn as_f64(&self) -> Option<f64> {
        serde_json::Value::as_f64(self)
    }

    fn as_str(&self) -> Option<&str> {
        serde_json::Value::as_str(self)
    }

    fn write_serialized(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write!(f, "{self}")
    }
}
