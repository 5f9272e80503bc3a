// ============================================================================
// Entity Store - Backing Key-Value Persistence
// ============================================================================
//
// Backends are keyed by (entity type, id) and hold one `Entity` per key.
// Every record operation takes the store as an explicit `&mut` dependency.
//
// ============================================================================

pub mod codec;
pub mod instrumented;
pub mod memory;
pub mod redis_store;

pub use codec::{decode_entity, encode_entity};
pub use instrumented::InstrumentedStore;
pub use memory::InMemoryStore;
pub use redis_store::{entity_key, RedisStore};

use crate::entity_store::core::Entity;

// ============================================================================
// Store Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Failed to encode {entity_type} entity {id}: {source}")]
    Encode {
        entity_type: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode {entity_type} entity {id}: {source}")]
    Decode {
        entity_type: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Store Trait
// ============================================================================

/// Synchronous key-value store for entities
pub trait Store {
    /// Upsert: replaces whatever is stored under (entity_type, id)
    fn set(&mut self, entity_type: &str, id: &str, entity: &Entity) -> Result<(), StoreError>;

    /// Point lookup; a missing entity is `Ok(None)`
    fn get(&mut self, entity_type: &str, id: &str) -> Result<Option<Entity>, StoreError>;

    /// Returns whether anything was removed
    fn remove(&mut self, entity_type: &str, id: &str) -> Result<bool, StoreError>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn set(&mut self, entity_type: &str, id: &str, entity: &Entity) -> Result<(), StoreError> {
        (**self).set(entity_type, id, entity)
    }

    fn get(&mut self, entity_type: &str, id: &str) -> Result<Option<Entity>, StoreError> {
        (**self).get(entity_type, id)
    }

    fn remove(&mut self, entity_type: &str, id: &str) -> Result<bool, StoreError> {
        (**self).remove(entity_type, id)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn set(&mut self, entity_type: &str, id: &str, entity: &Entity) -> Result<(), StoreError> {
        (**self).set(entity_type, id, entity)
    }

    fn get(&mut self, entity_type: &str, id: &str) -> Result<Option<Entity>, StoreError> {
        (**self).get(entity_type, id)
    }

    fn remove(&mut self, entity_type: &str, id: &str) -> Result<bool, StoreError> {
        (**self).remove(entity_type, id)
    }
}
