crate::entity! {
    /// One account's RSVP to one event.
    pub struct Rsvp("RSVP") {
        /// Account id
        required attendee: String => "attendee",
        /// Event id
        required event: String => "event",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::{EntityRecord, InMemoryStore, Value};

    #[test]
    fn test_default_foreign_keys_are_empty_strings() {
        let mut store = InMemoryStore::new();
        Rsvp::new("0x1-0-alice").save(&mut store).unwrap();

        let loaded = Rsvp::load(&mut store, "0x1-0-alice").unwrap().unwrap();
        assert_eq!(loaded.id(), "0x1-0-alice");
        assert_eq!(loaded.attendee(), "");
        assert_eq!(loaded.event(), "");

        let stored = store.raw("RSVP", "0x1-0-alice").unwrap();
        assert_eq!(stored.get("attendee"), Some(&Value::from("")));
        assert_eq!(stored.get("event"), Some(&Value::from("")));
    }

    #[test]
    fn test_foreign_keys_round_trip() {
        let mut store = InMemoryStore::new();
        let mut rsvp = Rsvp::new("0x1-0-alice");
        rsvp.set_attendee("0xalice".to_string());
        rsvp.set_event("0x1-0".to_string());
        rsvp.save(&mut store).unwrap();

        let loaded = Rsvp::load(&mut store, "0x1-0-alice").unwrap().unwrap();
        assert_eq!(loaded.attendee(), "0xalice");
        assert_eq!(loaded.event(), "0x1-0");
    }

    #[test]
    fn test_stored_under_rsvp_type_name() {
        let mut store = InMemoryStore::new();
        Rsvp::new("r").save(&mut store).unwrap();

        assert_eq!(Rsvp::ENTITY_TYPE, "RSVP");
        assert_eq!(store.ids("RSVP"), vec!["r".to_string()]);
    }

    #[test]
    #[should_panic(expected = "Cannot save RSVP entity without an ID")]
    fn test_save_without_id_panics() {
        let mut store = InMemoryStore::new();
        let mut rsvp = Rsvp::new("r");
        rsvp.entity_mut().unset("id");
        let _ = rsvp.save(&mut store);
    }
}
