use std::sync::Arc;
use std::time::Instant;

use super::{Store, StoreError};
use crate::entity_store::core::Entity;
use crate::metrics::{StoreMetrics, OP_GET, OP_REMOVE, OP_SET};

// ============================================================================
// Instrumented Store - Metrics Decorator for Any Backend
// ============================================================================

pub struct InstrumentedStore<S> {
    inner: S,
    metrics: Arc<StoreMetrics>,
}

impl<S: Store> InstrumentedStore<S> {
    pub fn new(inner: S, metrics: Arc<StoreMetrics>) -> Self {
        Self { inner, metrics }
    }

    pub fn metrics(&self) -> &Arc<StoreMetrics> {
        &self.metrics
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn observe<T>(
        &self,
        entity_type: &str,
        id: &str,
        operation: &str,
        started: Instant,
        result: &Result<T, StoreError>,
    ) {
        let elapsed = started.elapsed().as_secs_f64();
        self.metrics
            .record_operation(entity_type, operation, elapsed, result.is_ok());

        if let Err(e) = result {
            tracing::warn!(
                entity_type = %entity_type,
                id = %id,
                operation = operation,
                error = %e,
                "Entity store operation failed"
            );
        }
    }
}

impl<S: Store> Store for InstrumentedStore<S> {
    fn set(&mut self, entity_type: &str, id: &str, entity: &Entity) -> Result<(), StoreError> {
        let started = Instant::now();
        let result = self.inner.set(entity_type, id, entity);
        self.observe(entity_type, id, OP_SET, started, &result);
        result
    }

    fn get(&mut self, entity_type: &str, id: &str) -> Result<Option<Entity>, StoreError> {
        let started = Instant::now();
        let result = self.inner.get(entity_type, id);
        self.observe(entity_type, id, OP_GET, started, &result);

        if let Ok(None) = result {
            self.metrics.record_not_found(entity_type);
        }
        result
    }

    fn remove(&mut self, entity_type: &str, id: &str) -> Result<bool, StoreError> {
        let started = Instant::now();
        let result = self.inner.remove(entity_type, id);
        self.observe(entity_type, id, OP_REMOVE, started, &result);
        result
    }
}
