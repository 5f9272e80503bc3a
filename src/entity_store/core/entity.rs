use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::FieldValue;
use super::value::{Value, ValueError};

// ============================================================================
// Entity - Field Map Persisted Under (entity type, id)
// ============================================================================
//
// Untyped storage shared by every generated entity type. A key is either
// present with a value or absent; unsetting removes the key outright.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
    fields: BTreeMap<String, Value>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Remove a field, returning the value it held
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Decode a field. Absent and `Null` fields both read as `None`.
    pub fn try_get<T: FieldValue>(&self, key: &str) -> Result<Option<T>, ValueError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value).map(Some),
        }
    }

    /// Read a required field.
    ///
    /// Panics if the field is unset or holds another kind; generated
    /// constructors populate every required field, so either case is a bug
    /// in the caller.
    pub fn get_required<T: FieldValue>(&self, key: &str) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => panic!("Required field `{}` is not set", key),
            Err(e) => panic!("Field `{}`: {}", key, e),
        }
    }

    /// Read an optional field. Panics only on a kind mismatch.
    pub fn get_optional<T: FieldValue>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => panic!("Field `{}`: {}", key, e),
        }
    }

    pub fn set_value<T: FieldValue>(&mut self, key: &str, value: T) {
        self.set(key, value.into_value());
    }

    /// `None` removes the field; it is never stored as `Null`.
    pub fn set_optional<T: FieldValue>(&mut self, key: &str, value: Option<T>) {
        match value {
            Some(value) => self.set_value(key, value),
            None => {
                self.unset(key);
            }
        }
    }
}

impl FromIterator<(String, Value)> for Entity {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
