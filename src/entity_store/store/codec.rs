use crate::entity_store::core::Entity;

// ============================================================================
// Entity Codec - JSON Form for Byte-Oriented Backends
// ============================================================================
//
// Each field keeps its kind tag: {"maxCapacity": {"kind": "BigInt", "data": "100"}}
//
// ============================================================================

pub fn encode_entity(entity: &Entity) -> serde_json::Result<String> {
    serde_json::to_string(entity)
}

pub fn decode_entity(json: &str) -> serde_json::Result<Entity> {
    serde_json::from_str(json)
}
