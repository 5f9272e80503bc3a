use super::entity::Entity;
use super::value::Value;
use crate::entity_store::store::{Store, StoreError};

// ============================================================================
// Entity Record - Typed Wrapper Around an `Entity`
// ============================================================================
//
// Implemented by every schema type (normally through `entity!`). Persistence
// is generic: a record saves its whole field map under (ENTITY_TYPE, id) and
// loads back from the same key.
//
// ============================================================================

pub trait EntityRecord: Sized {
    /// Type name the store keys this record under, e.g. `"Event"`
    const ENTITY_TYPE: &'static str;

    fn from_entity(entity: Entity) -> Self;

    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn into_entity(self) -> Entity;

    /// Write the full field set, overwriting any stored version.
    ///
    /// Panics if `id` is unset or not a string.
    fn save<S: Store + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let id = saveable_id(Self::ENTITY_TYPE, self.entity());
        store.set(Self::ENTITY_TYPE, id, self.entity())
    }

    /// `Ok(None)` when nothing is stored under `id`
    fn load<S: Store + ?Sized>(store: &mut S, id: &str) -> Result<Option<Self>, StoreError> {
        Ok(store.get(Self::ENTITY_TYPE, id)?.map(Self::from_entity))
    }

    fn remove<S: Store + ?Sized>(store: &mut S, id: &str) -> Result<bool, StoreError> {
        store.remove(Self::ENTITY_TYPE, id)
    }
}

/// Returns the id an entity will be saved under.
///
/// Panics when `id` is missing or not a string: both mean the caller built
/// the record wrong, not that the store misbehaved.
pub fn saveable_id<'a>(entity_type: &str, entity: &'a Entity) -> &'a str {
    match entity.get("id") {
        Some(Value::String(id)) => id,
        Some(other) => panic!(
            "Cannot save {} entity with non-string ID ({} value). \
             Consider using .to_hex() to convert the \"id\" to a string.",
            entity_type,
            other.kind()
        ),
        None => panic!("Cannot save {} entity without an ID", entity_type),
    }
}

// ============================================================================
// entity! - Declares a Typed Entity From a Field List
// ============================================================================
//
//   crate::entity! {
//       pub struct Rsvp("RSVP") {
//           required attendee: String => "attendee",
//           optional note: String => "note",
//       }
//   }
//
// expands to a struct with `new`, `id`/`set_id`, `save`/`load`/`remove`,
// one getter and one `set_` method per field, a `FIELDS` description, and an
// `EntityRecord` impl. Required fields start at `Default::default()`.
//
// ============================================================================

#[macro_export]
macro_rules! entity {
    (@spec required $ty:ty => $store_name:literal) => {
        $crate::entity_store::FieldSpec::new(
            $store_name,
            <$ty as $crate::entity_store::FieldValue>::KIND,
            true,
        )
    };
    (@spec optional $ty:ty => $store_name:literal) => {
        $crate::entity_store::FieldSpec::new(
            $store_name,
            <$ty as $crate::entity_store::FieldValue>::KIND,
            false,
        )
    };

    (@default $entity:ident, required $ty:ty => $store_name:literal) => {
        $entity.set_value::<$ty>($store_name, <$ty as ::core::default::Default>::default())
    };
    (@default $entity:ident, optional $ty:ty => $store_name:literal) => {};

    (@accessor $(#[$meta:meta])* required $field:ident : $ty:ty => $store_name:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub fn $field(&self) -> $ty {
                self.entity.get_required::<$ty>($store_name)
            }

            pub fn [<set_ $field>](&mut self, value: $ty) {
                self.entity.set_value::<$ty>($store_name, value);
            }
        }
    };
    (@accessor $(#[$meta:meta])* optional $field:ident : $ty:ty => $store_name:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub fn $field(&self) -> ::core::option::Option<$ty> {
                self.entity.get_optional::<$ty>($store_name)
            }

            pub fn [<set_ $field>](&mut self, value: ::core::option::Option<$ty>) {
                self.entity.set_optional::<$ty>($store_name, value);
            }
        }
    };

    (
        $(#[$struct_meta:meta])*
        $vis:vis struct $name:ident($entity_type:literal) {
            $(
                $(#[$field_meta:meta])*
                $presence:ident $field:ident : $ty:ty => $store_name:literal
            ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            entity: $crate::entity_store::Entity,
        }

        impl $name {
            /// Every stored field, `id` first
            pub const FIELDS: &'static [$crate::entity_store::FieldSpec] = &[
                $crate::entity_store::FieldSpec::new(
                    "id",
                    $crate::entity_store::ValueKind::String,
                    true,
                ),
                $( $crate::entity!(@spec $presence $ty => $store_name), )*
            ];

            pub fn new(id: impl ::core::convert::Into<::std::string::String>) -> Self {
                let mut entity = $crate::entity_store::Entity::new();
                entity.set("id", $crate::entity_store::Value::String(id.into()));
                $( $crate::entity!(@default entity, $presence $ty => $store_name); )*
                Self { entity }
            }

            pub fn id(&self) -> ::std::string::String {
                self.entity.get_required::<::std::string::String>("id")
            }

            pub fn set_id(&mut self, id: impl ::core::convert::Into<::std::string::String>) {
                self.entity.set("id", $crate::entity_store::Value::String(id.into()));
            }

            pub fn save<S>(
                &self,
                store: &mut S,
            ) -> ::core::result::Result<(), $crate::entity_store::StoreError>
            where
                S: $crate::entity_store::Store + ?Sized,
            {
                <Self as $crate::entity_store::EntityRecord>::save(self, store)
            }

            pub fn load<S>(
                store: &mut S,
                id: &str,
            ) -> ::core::result::Result<
                ::core::option::Option<Self>,
                $crate::entity_store::StoreError,
            >
            where
                S: $crate::entity_store::Store + ?Sized,
            {
                <Self as $crate::entity_store::EntityRecord>::load(store, id)
            }

            pub fn remove<S>(
                store: &mut S,
                id: &str,
            ) -> ::core::result::Result<bool, $crate::entity_store::StoreError>
            where
                S: $crate::entity_store::Store + ?Sized,
            {
                <Self as $crate::entity_store::EntityRecord>::remove(store, id)
            }

            $(
                $crate::entity!(
                    @accessor $(#[$field_meta])* $presence $field : $ty => $store_name
                );
            )*
        }

        impl $crate::entity_store::EntityRecord for $name {
            const ENTITY_TYPE: &'static str = $entity_type;

            fn from_entity(entity: $crate::entity_store::Entity) -> Self {
                Self { entity }
            }

            fn entity(&self) -> &$crate::entity_store::Entity {
                &self.entity
            }

            fn entity_mut(&mut self) -> &mut $crate::entity_store::Entity {
                &mut self.entity
            }

            fn into_entity(self) -> $crate::entity_store::Entity {
                self.entity
            }
        }
    };
}

// ============================================================================
// Unit Tests
// ============================================================================
