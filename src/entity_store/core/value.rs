use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Value - Tagged Union Stored Under Every Entity Field
// ============================================================================
//
// Every field of every entity is stored as a `Value`. The kind tag travels
// with the value (also in its serialized form) so a backend never has to
// guess how to decode a field.
//
// Kind numbering matches the indexing runtime:
//   STRING=0, INT=1, BIGDECIMAL=2, BOOL=3, ARRAY=4, NULL=5, BYTES=6, BIGINT=7
//
// ============================================================================

/// Kind tag of a stored [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String = 0,
    Int = 1,
    BigDecimal = 2,
    Bool = 3,
    Array = 4,
    Null = 5,
    Bytes = 6,
    BigInt = 7,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "String",
            ValueKind::Int => "Int",
            ValueKind::BigDecimal => "BigDecimal",
            ValueKind::Bool => "Bool",
            ValueKind::Array => "Array",
            ValueKind::Null => "Null",
            ValueKind::Bytes => "Bytes",
            ValueKind::BigInt => "BigInt",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Value Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("Expected {expected} value, found {found}")]
    KindMismatch { expected: ValueKind, found: ValueKind },

    #[error("Array element {index}: expected {expected} value, found {found}")]
    ElementKindMismatch {
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

// ============================================================================
// Bytes - Raw Byte Sequence (hashes, addresses)
// ============================================================================

/// Raw byte sequence. Textual form is `0x`-prefixed lowercase hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse a hex string, with or without a `0x`/`0X` prefix
    pub fn from_hex_str(s: &str) -> Result<Self, ValueError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        hex::decode(digits)
            .map(Self)
            .map_err(|_| ValueError::InvalidHex(s.to_string()))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Bytes::from_hex_str(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Value
// ============================================================================

/// A single stored field value
///
/// Serialized as `{"kind": <kind>, "data": <payload>}`; `Null` has no `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i32),
    BigDecimal(BigDecimal),
    Bool(bool),
    Array(Vec<Value>),
    Null,
    Bytes(Bytes),
    BigInt(BigInt),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::BigDecimal(_) => ValueKind::BigDecimal,
            Value::Bool(_) => ValueKind::Bool,
            Value::Array(_) => ValueKind::Array,
            Value::Null => ValueKind::Null,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::BigInt(_) => ValueKind::BigInt,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn from_string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn from_string_array(values: Vec<String>) -> Self {
        Value::Array(values.into_iter().map(Value::String).collect())
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn to_i32(&self) -> Result<i32, ValueError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }

    pub fn to_big_decimal(&self) -> Result<BigDecimal, ValueError> {
        match self {
            Value::BigDecimal(d) => Ok(d.clone()),
            other => Err(other.mismatch(ValueKind::BigDecimal)),
        }
    }

    pub fn to_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], ValueError> {
        match self {
            Value::Array(values) => Ok(values),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn to_bytes(&self) -> Result<Bytes, ValueError> {
        match self {
            Value::Bytes(b) => Ok(b.clone()),
            other => Err(other.mismatch(ValueKind::Bytes)),
        }
    }

    pub fn to_big_int(&self) -> Result<BigInt, ValueError> {
        match self {
            Value::BigInt(n) => Ok(n.clone()),
            other => Err(other.mismatch(ValueKind::BigInt)),
        }
    }

    /// Decode an `Array` whose elements are all strings
    pub fn to_string_array(&self) -> Result<Vec<String>, ValueError> {
        self.as_array()?
            .iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::String(s) => Ok(s.clone()),
                other => Err(ValueError::ElementKindMismatch {
                    index,
                    expected: ValueKind::String,
                    found: other.kind(),
                }),
            })
            .collect()
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        ValueError::KindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::BigDecimal(d) => write!(f, "{}", d),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            Value::Null => f.write_str("null"),
            Value::Bytes(b) => write!(f, "{}", b),
            Value::BigInt(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::BigDecimal(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::from_string_array(values)
    }
}

// ============================================================================
// Serialized Form
// ============================================================================
//
// Arbitrary-precision numbers travel as decimal strings so JSON readers never
// squeeze them through f64.
//
// ============================================================================

/// Number written and read as its decimal string
struct DecimalString<T>(T);

impl<T: fmt::Display> Serialize for DecimalString<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for DecimalString<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map(DecimalString).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.is_null() { 1 } else { 2 };
        let mut state = serializer.serialize_struct("Value", len)?;
        state.serialize_field("kind", self.kind().as_str())?;
        match self {
            Value::String(v) => state.serialize_field("data", v)?,
            Value::Int(v) => state.serialize_field("data", v)?,
            Value::BigDecimal(v) => state.serialize_field("data", &DecimalString(v))?,
            Value::Bool(v) => state.serialize_field("data", v)?,
            Value::Array(v) => state.serialize_field("data", v)?,
            Value::Null => {}
            Value::Bytes(v) => state.serialize_field("data", v)?,
            Value::BigInt(v) => state.serialize_field("data", &DecimalString(v))?,
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(tag = "kind", content = "data")]
enum TaggedValue {
    String(String),
    Int(i32),
    BigDecimal(DecimalString<BigDecimal>),
    Bool(bool),
    Array(Vec<Value>),
    Null,
    Bytes(Bytes),
    BigInt(DecimalString<BigInt>),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TaggedValue::deserialize(deserializer)? {
            TaggedValue::String(v) => Value::String(v),
            TaggedValue::Int(v) => Value::Int(v),
            TaggedValue::BigDecimal(v) => Value::BigDecimal(v.0),
            TaggedValue::Bool(v) => Value::Bool(v),
            TaggedValue::Array(v) => Value::Array(v),
            TaggedValue::Null => Value::Null,
            TaggedValue::Bytes(v) => Value::Bytes(v),
            TaggedValue::BigInt(v) => Value::BigInt(v.0),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
