use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use super::value::{Bytes, Value, ValueError, ValueKind};

// ============================================================================
// Field Types - Typed Projection Over `Value`
// ============================================================================
//
// A `FieldValue` is a Rust type that one entity field can hold. Accessors on
// generated entity types go through this trait, so each field reads and
// writes exactly one value kind.
//
// ============================================================================

pub trait FieldValue: Sized {
    /// Kind tag this type is stored under
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.to_i32()
    }
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.to_bool()
    }
}

impl FieldValue for BigInt {
    const KIND: ValueKind = ValueKind::BigInt;

    fn into_value(self) -> Value {
        Value::BigInt(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.to_big_int()
    }
}

impl FieldValue for BigDecimal {
    const KIND: ValueKind = ValueKind::BigDecimal;

    fn into_value(self) -> Value {
        Value::BigDecimal(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.to_big_decimal()
    }
}

impl FieldValue for Bytes {
    const KIND: ValueKind = ValueKind::Bytes;

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.to_bytes()
    }
}

impl FieldValue for Vec<String> {
    const KIND: ValueKind = ValueKind::Array;

    fn into_value(self) -> Value {
        Value::from_string_array(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.to_string_array()
    }
}

// ============================================================================
// Field Specs - Schema Description
// ============================================================================

/// Store-level description of one entity field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name the field is stored under, e.g. `eventID`
    pub name: &'static str,
    pub kind: ValueKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: ValueKind, required: bool) -> Self {
        Self { name, kind, required }
    }
}
