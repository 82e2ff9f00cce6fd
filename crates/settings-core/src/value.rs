//! Dynamically-typed setting values.
//!
//! A settings tree is usually produced by some external deserializer and then
//! handed to [`crate::Settings`] for typed reads. [`Value`] is a closed union,
//! so every consumer can match on it exhaustively. Integer widths are kept
//! distinct: a value stored as [`Value::Int64`] is never readable as
//! [`Value::Int`] and vice versa.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One level of nested settings. Keys are unique; ordering carries no meaning.
pub type Mapping = BTreeMap<String, Value>;

/// A single node in a settings tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bytes(Vec<u8>),
    /// Native-width signed integer.
    Int(isize),
    Int64(i64),
    /// Native-width unsigned integer.
    Uint(usize),
    Uint64(u64),
    Float64(f64),
    /// Held for inspection through [`crate::Settings::value`]; no typed extractor.
    Bool(bool),
    /// Held for inspection through [`crate::Settings::value`]; no typed extractor.
    List(Vec<Value>),
    Mapping(Mapping),
    /// Missing key, or the result of navigating through a non-mapping.
    #[default]
    Absent,
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Bytes,
    Int,
    Int64,
    Uint,
    Uint64,
    Float64,
    Bool,
    List,
    Mapping,
    Absent,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::Int => "int",
            ValueKind::Int64 => "int64",
            ValueKind::Uint => "uint",
            ValueKind::Uint64 => "uint64",
            ValueKind::Float64 => "float64",
            ValueKind::Bool => "bool",
            ValueKind::List => "list",
            ValueKind::Mapping => "mapping",
            ValueKind::Absent => "absent",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Int(_) => ValueKind::Int,
            Value::Int64(_) => ValueKind::Int64,
            Value::Uint(_) => ValueKind::Uint,
            Value::Uint64(_) => ValueKind::Uint64,
            Value::Float64(_) => ValueKind::Float64,
            Value::Bool(_) => ValueKind::Bool,
            Value::List(_) => ValueKind::List,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Absent => ValueKind::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Look up `key` if this is a mapping. Anything else has no children.
    pub fn child(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Uint(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Uint64(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float64(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Absent, Into::into)
    }
}

/// Collect key/value pairs into a [`Value::Mapping`]. Later duplicates win.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Convert an already-decoded JSON tree.
///
/// JSON has a single number type, so numbers are split by what they fit:
/// integers in `i64` range become [`Value::Int64`], larger non-negative
/// integers become [`Value::Uint64`], everything else [`Value::Float64`].
/// `null` becomes [`Value::Absent`].
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint64(u)
                } else {
                    n.as_f64().map_or(Value::Absent, Value::Float64)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::List(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
