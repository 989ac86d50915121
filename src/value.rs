use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use smol_str::SmolStr;
use std::collections::BTreeMap;

// ─── FieldNumber ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
pub enum FieldNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl std::fmt::Debug for FieldNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldNumber::I64(i) => write!(f, "{}", i),
            FieldNumber::U64(u) => write!(f, "{}", u),
            FieldNumber::F64(v) => write!(f, "{}", v),
        }
    }
}

impl FieldNumber {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldNumber::I64(i) => i as f64,
            FieldNumber::U64(u) => u as f64,
            FieldNumber::F64(f) => f,
        }
    }

    /// Integral coercion. Floats convert only when they carry no fraction.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            FieldNumber::I64(i) => Some(i),
            FieldNumber::U64(u) => i64::try_from(u).ok(),
            FieldNumber::F64(f) => {
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
            FieldNumber::U64(u) => Some(u),
            FieldNumber::I64(i) => u64::try_from(i).ok(),
            FieldNumber::F64(f) => {
                if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }
}

// ─── FieldValue ─────────────────────────────────────────────────────────────

/// One field value as handed over by the transport layer after decoding a
/// server response. Treated as opaque comparable data: equality is what
/// drives modification tracking, nothing here interprets the content.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(FieldNumber),
    Text(SmolStr),
    Array(Vec<FieldValue>),
    Object(BTreeMap<SmolStr, FieldValue>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Null
    }
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<SmolStr, FieldValue>> {
        match self {
            FieldValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<FieldValue>> {
        match self {
            FieldValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.as_object()?.get(&SmolStr::new(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

// ─── Serialize (for building write-back payloads) ───────────────────────────

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Number(n) => match n {
                FieldNumber::I64(i) => serializer.serialize_i64(*i),
                FieldNumber::U64(u) => serializer.serialize_u64(*u),
                FieldNumber::F64(f) => serializer.serialize_f64(*f),
            },
            FieldValue::Text(s) => serializer.serialize_str(s.as_str()),
            FieldValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            FieldValue::Object(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k.as_str(), v)?;
                }
                m.end()
            }
        }
    }
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(FieldNumber::F64(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(FieldNumber::I64(n))
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(FieldNumber::U64(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(SmolStr::from(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(SmolStr::from(s))
    }
}

// ─── From/Into serde_json::Value ────────────────────────────────────────────

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Number(FieldNumber::I64(i))
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Number(FieldNumber::U64(u))
                } else {
                    FieldValue::Number(FieldNumber::F64(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_json::Value::String(s) => FieldValue::Text(SmolStr::from(s)),
            serde_json::Value::Array(arr) => {
                FieldValue::Array(arr.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(obj) => FieldValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (SmolStr::from(k), FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(val: FieldValue) -> Self {
        match val {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(b),
            FieldValue::Number(n) => match n {
                FieldNumber::I64(i) => serde_json::json!(i),
                FieldNumber::U64(u) => serde_json::json!(u),
                FieldNumber::F64(f) => serde_json::json!(f),
            },
            FieldValue::Text(s) => serde_json::Value::String(s.to_string()),
            FieldValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(|v| v.into()).collect())
            }
            FieldValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect(),
            ),
        }
    }
}
