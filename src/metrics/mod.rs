use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for entity store traffic
// ============================================================================
//
// Provides metrics for:
// - Store operations (set/get/remove) by entity type
// - Failed store operations
// - Loads that found nothing
// - Operation latency
//
// Rendered in the Prometheus text format via `encode_text`.
// ============================================================================

/// Store operation names used as the `operation` label
pub const OP_SET: &str = "set";
pub const OP_GET: &str = "get";
pub const OP_REMOVE: &str = "remove";

pub struct StoreMetrics {
    registry: Registry,

    pub store_operations: IntCounterVec,
    pub store_operation_failures: IntCounterVec,
    pub store_entities_not_found: IntCounterVec,
    pub store_operation_duration: HistogramVec,
}

impl StoreMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let store_operations = IntCounterVec::new(
            Opts::new(
                "entity_store_operations_total",
                "Entity store operations that completed successfully",
            ),
            &["entity_type", "operation"],
        )?;
        registry.register(Box::new(store_operations.clone()))?;

        let store_operation_failures = IntCounterVec::new(
            Opts::new(
                "entity_store_operation_failures_total",
                "Entity store operations that returned an error",
            ),
            &["entity_type", "operation"],
        )?;
        registry.register(Box::new(store_operation_failures.clone()))?;

        let store_entities_not_found = IntCounterVec::new(
            Opts::new(
                "entity_store_not_found_total",
                "Loads that found no stored entity",
            ),
            &["entity_type"],
        )?;
        registry.register(Box::new(store_entities_not_found.clone()))?;

        let store_operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "entity_store_operation_duration_seconds",
                "Entity store operation duration",
            )
            .buckets(vec![0.00001, 0.0001, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
            &["operation"],
        )?;
        registry.register(Box::new(store_operation_duration.clone()))?;

        Ok(Self {
            registry,
            store_operations,
            store_operation_failures,
            store_entities_not_found,
            store_operation_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one store operation
    pub fn record_operation(
        &self,
        entity_type: &str,
        operation: &str,
        duration_secs: f64,
        success: bool,
    ) {
        if success {
            self.store_operations.with_label_values(&[entity_type, operation]).inc();
        } else {
            self.store_operation_failures.with_label_values(&[entity_type, operation]).inc();
        }
        self.store_operation_duration.with_label_values(&[operation]).observe(duration_secs);
    }

    /// Helper to record a load that found nothing
    pub fn record_not_found(&self, entity_type: &str) {
        self.store_entities_not_found.with_label_values(&[entity_type]).inc();
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn encode_text(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
