use redis::Commands;

use super::codec::{decode_entity, encode_entity};
use super::{Store, StoreError};
use crate::entity_store::core::Entity;

// ============================================================================
// Redis Store
// ============================================================================
//
// One Redis string per entity, key `<prefix>:<entity type>:<id>`, value the
// JSON-encoded field map. SET replaces the whole entity, which gives the
// same full-overwrite semantics as the in-memory store.
//
// ============================================================================

pub struct RedisStore {
    connection: redis::Connection,
    key_prefix: String,
}

/// Redis key an entity is stored under
pub fn entity_key(key_prefix: &str, entity_type: &str, id: &str) -> String {
    format!("{}:{}:{}", key_prefix, entity_type, id)
}

impl RedisStore {
    pub fn connect(url: &str, key_prefix: impl Into<String>) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection()?;
        let key_prefix = key_prefix.into();

        tracing::info!(url = %url, key_prefix = %key_prefix, "Connected to Redis entity store");

        Ok(Self {
            connection,
            key_prefix,
        })
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }
}

impl Store for RedisStore {
    fn set(&mut self, entity_type: &str, id: &str, entity: &Entity) -> Result<(), StoreError> {
        let key = entity_key(&self.key_prefix, entity_type, id);
        let payload = encode_entity(entity).map_err(|source| StoreError::Encode {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
            source,
        })?;

        self.connection.set::<_, _, ()>(&key, payload).map_err(|e| {
            tracing::error!(key = %key, error = %e, "Failed to write entity to Redis");
            e
        })?;

        tracing::debug!(key = %key, field_count = entity.len(), "Stored entity in Redis");
        Ok(())
    }

    fn get(&mut self, entity_type: &str, id: &str) -> Result<Option<Entity>, StoreError> {
        let key = entity_key(&self.key_prefix, entity_type, id);
        let payload: Option<String> = self.connection.get(&key)?;

        tracing::debug!(key = %key, found = payload.is_some(), "Loaded entity from Redis");

        payload
            .map(|json| {
                decode_entity(&json).map_err(|source| {
                    tracing::warn!(key = %key, error = %source, "Stored entity is not decodable");
                    StoreError::Decode {
                        entity_type: entity_type.to_string(),
                        id: id.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }

    fn remove(&mut self, entity_type: &str, id: &str) -> Result<bool, StoreError> {
        let key = entity_key(&self.key_prefix, entity_type, id);
        let removed: i64 = self.connection.del(&key)?;

        tracing::debug!(key = %key, removed = removed > 0, "Removed entity from Redis");
        Ok(removed > 0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
