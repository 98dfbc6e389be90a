use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use smol_str::SmolStr;
use std::collections::BTreeMap;

use crate::model::Model;
use crate::serialization::encode_model;

pub type FastMap<K, V> = BTreeMap<K, V>;

/// The generic, transport-agnostic map produced by encode and consumed by
/// decode. Keys are field names; absent optionals have no entry at all.
pub type EncodedMap = FastMap<SmolStr, Value>;

// ─── Number ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl std::fmt::Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "I64({})", i),
            Number::U64(u) => write!(f, "U64({})", u),
            Number::F64(v) => write!(f, "F64({})", v),
        }
    }
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
            Number::F64(f) => f,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::I64(i) => Some(i),
            Number::U64(u) => i64::try_from(u).ok(),
            Number::F64(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    pub fn as_u64(self) -> Option<u64> {
        match self {
            Number::U64(u) => Some(u),
            Number::I64(i) => u64::try_from(i).ok(),
            Number::F64(f) => {
                if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }
}

// ─── Value ──────────────────────────────────────────────────────────────────

/// The uniform representation of a field's current content.
///
/// `Record`/`Records` hold live, typed model instances (what the accessor
/// hands out and takes in); `Object`/`Array` are their generic encoded forms
/// (what the codec emits and consumes). `Null` only ever enters through the
/// JSON edge — encode never produces it, and decode treats it as absence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    Str(SmolStr),
    Record(Box<dyn Model>),
    Records(Vec<Box<dyn Model>>),
    Array(Vec<Value>),
    Object(EncodedMap),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&EncodedMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<EncodedMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Borrow the live model held by a `Record` value.
    pub fn as_model(&self) -> Option<&dyn Model> {
        match self {
            Value::Record(m) => Some(m.as_ref()),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short tag for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(Number::I64(_)) => "i64",
            Value::Number(Number::U64(_)) => "u64",
            Value::Number(Number::F64(_)) => "f64",
            Value::Str(_) => "str",
            Value::Record(_) => "record",
            Value::Records(_) => "record sequence",
            Value::Array(_) => "array",
            Value::Object(_) => "map",
        }
    }
}

// ─── Serialize (for serde_json::to_* on encoded maps) ───────────────────────

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match n {
                Number::I64(i) => serializer.serialize_i64(*i),
                Number::U64(u) => serializer.serialize_u64(*u),
                Number::F64(f) => serializer.serialize_f64(*f),
            },
            Value::Str(s) => serializer.serialize_str(s.as_str()),
            // Live models serialize as their encoded maps.
            Value::Record(m) => serialize_map(serializer, &encode_model(m.as_ref())),
            Value::Records(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for m in items {
                    seq.serialize_element(&Value::Object(encode_model(m.as_ref())))?;
                }
                seq.end()
            }
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Object(map) => serialize_map(serializer, map),
        }
    }
}

fn serialize_map<S: Serializer>(serializer: S, map: &EncodedMap) -> Result<S::Ok, S::Error> {
    let mut m = serializer.serialize_map(Some(map.len()))?;
    for (k, v) in map {
        m.serialize_entry(k.as_str(), v)?;
    }
    m.end()
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::F64(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::I64(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::U64(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(SmolStr::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(SmolStr::from(s))
    }
}

impl From<SmolStr> for Value {
    fn from(s: SmolStr) -> Self {
        Value::Str(s)
    }
}

// ─── From/Into serde_json::Value ────────────────────────────────────────────

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::U64(u))
                } else {
                    Value::Number(Number::F64(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_json::Value::String(s) => Value::Str(SmolStr::from(s)),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (SmolStr::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(val: Value) -> Self {
        match val {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => match n {
                Number::I64(i) => serde_json::json!(i),
                Number::U64(u) => serde_json::json!(u),
                Number::F64(f) => serde_json::json!(f),
            },
            Value::Str(s) => serde_json::Value::String(s.to_string()),
            Value::Record(m) => Value::Object(encode_model(m.as_ref())).into(),
            Value::Records(items) => serde_json::Value::Array(
                items
                    .into_iter()
                    .map(|m| Value::Object(encode_model(m.as_ref())).into())
                    .collect(),
            ),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(|v| v.into()).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect(),
            ),
        }
    }
}

/// Build a `Value::Object` literal, mostly for tests and fixtures.
#[macro_export]
macro_rules! obj {
    // Entry point for objects
    ({ $($key:expr => $val:tt),* $(,)? }) => {{
        let mut map = $crate::EncodedMap::new();
        $(
            map.insert(
                $crate::SmolStr::new($key),
                $crate::Value::from($crate::obj!(@value $val))
            );
        )*
        $crate::Value::Object(map)
    }};

    // Recursion for nested objects
    (@value { $($inner:tt)* }) => {
        $crate::obj!({ $($inner)* })
    };

    // Fallback for everything else (literals or finished Values)
    (@value $val:expr) => {
        $val
    };
}
