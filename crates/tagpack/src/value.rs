//! [`Value`] — the in-memory value graph the encoder walks.

use indexmap::IndexMap;

/// Key-ordered mapping. Keys are unique and iterate in insertion order.
pub type Mapping = IndexMap<String, Value>;

/// An encodable value.
///
/// "No value at all" is not a variant: the encoder takes `Option<&Value>` and
/// treats `None` as absent, which is distinct from [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Whole number. Encoded with an integer form when it fits 32 bits,
    /// otherwise as a single-precision float.
    Integer(i64),
    /// Floating-point number. Always narrowed to `f32` on the wire unless it is
    /// exactly a 32-bit integer, in which case it takes the integer forms.
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Builds a mapping from `(key, value)` pairs. A repeated key keeps its
    /// first position and takes the last value.
    pub fn mapping<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// The number as a 32-bit signed integer, if it is exactly one.
    ///
    /// This is the integral test the encoder dispatches on: a number counts as
    /// an integer only when truncating it to `i32` loses nothing. `-0.0`
    /// therefore counts as `0`, while `NaN`, infinities, fractions and anything
    /// outside the `i32` range do not.
    pub fn as_int32(&self) -> Option<i32> {
        match *self {
            Value::Integer(i) => i32::try_from(i).ok(),
            Value::Float(f) => float_as_int32(f),
            _ => None,
        }
    }
}

pub(crate) fn float_as_int32(f: f64) -> Option<i32> {
    let truncated = f as i32;
    if truncated as f64 == f {
        Some(truncated)
    } else {
        None
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(arr) => arr.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(obj) => Value::Mapping(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
