//! Typed entity bindings for the RSVP subgraph schema.
//!
//! `entity_store` holds the generic pieces (tagged `Value`, `Entity` field
//! map, `Store` backends, the `entity!` macro); `schema` declares the Event,
//! Account, RSVP and Confirmation records on top of them.

pub mod config;
pub mod entity_store;
pub mod metrics;
pub mod schema;

// Used by `entity!` expansions
#[doc(hidden)]
pub use paste;
