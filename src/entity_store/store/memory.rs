use std::collections::HashMap;

use super::{Store, StoreError};
use crate::entity_store::core::Entity;

// ============================================================================
// In-Memory Store
// ============================================================================
//
// Entities grouped by type, then by id. Cannot fail; used by tests and by
// the demo binary when no Redis is configured.
//
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entities: HashMap<String, HashMap<String, Entity>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entities of one type
    pub fn count(&self, entity_type: &str) -> usize {
        self.entities.get(entity_type).map_or(0, HashMap::len)
    }

    /// Sorted ids of one entity type
    pub fn ids(&self, entity_type: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entities
            .get(entity_type)
            .map(|by_id| by_id.keys().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Stored field map, without going through a typed record
    pub fn raw(&self, entity_type: &str, id: &str) -> Option<&Entity> {
        self.entities.get(entity_type)?.get(id)
    }
}

impl Store for InMemoryStore {
    fn set(&mut self, entity_type: &str, id: &str, entity: &Entity) -> Result<(), StoreError> {
        tracing::debug!(
            entity_type = %entity_type,
            id = %id,
            field_count = entity.len(),
            "Storing entity"
        );

        self.entities
            .entry(entity_type.to_string())
            .or_default()
            .insert(id.to_string(), entity.clone());
        Ok(())
    }

    fn get(&mut self, entity_type: &str, id: &str) -> Result<Option<Entity>, StoreError> {
        let entity = self.raw(entity_type, id).cloned();

        tracing::debug!(
            entity_type = %entity_type,
            id = %id,
            found = entity.is_some(),
            "Loaded entity"
        );

        Ok(entity)
    }

    fn remove(&mut self, entity_type: &str, id: &str) -> Result<bool, StoreError> {
        let removed = self
            .entities
            .get_mut(entity_type)
            .and_then(|by_id| by_id.remove(id))
            .is_some();

        tracing::debug!(entity_type = %entity_type, id = %id, removed, "Removed entity");
        Ok(removed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
