//! Typed field values in the document store's REST wire encoding.
//!
//! Every field value travels as a single-key JSON object naming its type,
//! e.g. `{"stringValue": "hello"}`. 64-bit integers are string-encoded on
//! the wire (`{"integerValue": "42"}`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A typed document field value.
///
/// Serializes to the single-key wire encoding:
///
/// ```rust
/// use firecheck_link::Value;
///
/// let json = serde_json::to_string(&Value::string("hello")).unwrap();
/// assert_eq!(json, r#"{"stringValue":"hello"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    /// Explicit null
    NullValue(()),

    /// Boolean
    BooleanValue(bool),

    /// 64-bit integer, string-encoded on the wire
    IntegerValue(#[serde(with = "int64_string")] i64),

    /// 64-bit float
    DoubleValue(f64),

    /// RFC 3339 timestamp string
    TimestampValue(String),

    /// UTF-8 string
    StringValue(String),

    /// Ordered list of values
    ArrayValue {
        #[serde(default)]
        values: Vec<Value>,
    },

    /// Nested field map
    MapValue {
        #[serde(default)]
        fields: BTreeMap<String, Value>,
    },
}

impl Value {
    pub fn null() -> Self {
        Value::NullValue(())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::StringValue(s.into())
    }

    pub fn integer(i: i64) -> Self {
        Value::IntegerValue(i)
    }

    pub fn boolean(b: bool) -> Self {
        Value::BooleanValue(b)
    }

    pub fn timestamp(ts: impl Into<String>) -> Self {
        Value::TimestampValue(ts.into())
    }

    /// The string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringValue(s) => Some(s),
            _ => None,
        }
    }
}

/// Human-readable rendering for operator output.
///
/// Strings are quoted; timestamps and numbers print bare.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::NullValue(()) => write!(f, "null"),
            Value::BooleanValue(b) => write!(f, "{}", b),
            Value::IntegerValue(i) => write!(f, "{}", i),
            Value::DoubleValue(d) => write!(f, "{}", d),
            Value::TimestampValue(ts) => write!(f, "{}", ts),
            Value::StringValue(s) => write!(f, "\"{}\"", s),
            Value::ArrayValue { values } => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::MapValue { fields } => {
                write!(f, "{{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// A value supplied to a write.
///
/// Either a concrete [`Value`] or a sentinel telling the store to fill in
/// a value server-side. Sentinels never appear in the document payload;
/// the client splits them out into field transforms on the commit request.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Concrete value written as-is
    Value(Value),

    /// Server-assigned write time
    ServerTimestamp,
}

impl FieldValue {
    pub fn string(s: impl Into<String>) -> Self {
        FieldValue::Value(Value::string(s))
    }

    pub fn server_timestamp() -> Self {
        FieldValue::ServerTimestamp
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Value(value)
    }
}

mod int64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&v.to_string())
    }

    // Accept both string-encoded and bare JSON numbers
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntRepr {
            Str(String),
            Num(i64),
        }

        match IntRepr::deserialize(deserializer)? {
            IntRepr::Str(s) => s
                .parse::<i64>()
                .map_err(|e| de::Error::custom(format!("invalid integerValue '{}': {}", s, e))),
            IntRepr::Num(n) => Ok(n),
        }
    }
}
