// ============================================================================
// Entity Store Infrastructure
// ============================================================================
//
// Generic, reusable entity binding infrastructure.
// Schema-specific record types are in src/schema/
//
// ============================================================================

// Core abstractions (GENERIC - works with any record type)
pub mod core;
pub mod store;

pub use self::core::*;
pub use self::store::*;

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
