// ============================================================================
// Entity Store Core - Value Model and Typed Records
// ============================================================================
//
// GENERIC building blocks shared by every schema type:
// - Value / ValueKind: tagged union stored under each field
// - FieldValue: typed projection of a Rust type onto one value kind
// - Entity: the untyped field map persisted per (type, id)
// - EntityRecord + entity!: typed records with save/load
//
// ============================================================================

pub mod entity;
pub mod field;
pub mod record;
pub mod value;

pub use entity::Entity;
pub use field::{FieldSpec, FieldValue};
pub use record::{saveable_id, EntityRecord};
pub use value::{Bytes, Value, ValueError, ValueKind};
