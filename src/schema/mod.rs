// ============================================================================
// Schema Layer - Typed Records for the RSVP Subgraph
// ============================================================================
//
// One module per record type, each declared with `entity!`:
// - Event: the event itself, counters and foreign-key lists
// - Account: per-wallet counters and foreign-key lists
// - Rsvp: account -> event RSVP (stored as "RSVP")
// - Confirmation: account -> event attendance
//
// Foreign keys are plain string ids; nothing here checks that the
// referenced record exists.
//
// ============================================================================

pub mod account;
pub mod confirmation;
pub mod event;
pub mod rsvp;

pub use account::Account;
pub use confirmation::Confirmation;
pub use event::Event;
pub use rsvp::Rsvp;
