use crate::entity_store::{BigInt, Bytes};

// ============================================================================
// Event - An RSVP-able Event Created On Chain
// ============================================================================

crate::entity! {
    /// An event attendees can RSVP to and be confirmed at.
    ///
    /// `rsvps` holds RSVP ids; `confirmed_attendees` holds the ids of
    /// confirmed attendees. Neither list is checked against stored records.
    pub struct Event("Event") {
        /// On-chain event identifier (32-byte hash)
        required event_id: Bytes => "eventID",
        optional name: String => "name",
        optional description: String => "description",
        optional link: String => "link",
        optional image_url: String => "imageURL",
        /// Address that created the event
        required event_owner: Bytes => "eventOwner",
        required event_timestamp: BigInt => "eventTimestamp",
        required max_capacity: BigInt => "maxCapacity",
        /// Deposit each attendee stakes when RSVPing, in wei
        required deposit: BigInt => "deposit",
        required paid_out: bool => "paidOut",
        required total_rsvps: BigInt => "totalRSVPs",
        required total_confirmed_attendees: BigInt => "totalConfirmedAttendees",
        optional rsvps: Vec<String> => "rsvps",
        optional confirmed_attendees: Vec<String> => "confirmedAttendees",
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::{EntityRecord, InMemoryStore, Value, ValueKind};
    use std::str::FromStr;

    #[test]
    fn test_new_event_defaults() {
        let event = Event::new("0x1-0");

        assert_eq!(event.id(), "0x1-0");
        assert_eq!(event.event_id(), Bytes::empty());
        assert_eq!(event.event_owner(), Bytes::empty());
        assert_eq!(event.event_timestamp(), BigInt::from(0));
        assert_eq!(event.max_capacity(), BigInt::from(0));
        assert_eq!(event.deposit(), BigInt::from(0));
        assert!(!event.paid_out());
        assert_eq!(event.total_rsvps(), BigInt::from(0));
        assert_eq!(event.total_confirmed_attendees(), BigInt::from(0));

        assert_eq!(event.name(), None);
        assert_eq!(event.description(), None);
        assert_eq!(event.link(), None);
        assert_eq!(event.image_url(), None);
        assert_eq!(event.rsvps(), None);
        assert_eq!(event.confirmed_attendees(), None);
    }

    #[test]
    fn test_defaults_survive_save_and_load() {
        let mut store = InMemoryStore::new();
        Event::new("0x1-0").save(&mut store).unwrap();

        let loaded = Event::load(&mut store, "0x1-0").unwrap().unwrap();
        assert_eq!(loaded.id(), "0x1-0");
        assert_eq!(loaded.max_capacity(), BigInt::from(0));
        assert!(!loaded.paid_out());
        assert_eq!(loaded.event_id(), Bytes::empty());
        assert_eq!(loaded.rsvps(), None);
    }

    #[test]
    fn test_created_event_scenario() {
        let mut store = InMemoryStore::new();

        let mut event = Event::new("0x1-0");
        event.set_event_id(Bytes::from([0u8; 32]));
        event.set_max_capacity(BigInt::from(100));
        event.save(&mut store).unwrap();

        let loaded = Event::load(&mut store, "0x1-0").unwrap().unwrap();
        assert_eq!(loaded.max_capacity(), BigInt::from(100));
        assert!(!loaded.paid_out());
        assert_eq!(loaded.rsvps(), None);
        assert_eq!(loaded.event_id(), Bytes::from([0u8; 32]));
        assert_eq!(loaded.event_id().len(), 32);
    }

    #[test]
    fn test_required_fields_round_trip_exactly() {
        let mut store = InMemoryStore::new();
        let deposit = BigInt::from_str("340282366920938463463374607431768211457").unwrap();
        let owner = Bytes::from_hex_str("0x71c7656ec7ab88b098defb751b7401b5f6d8976f").unwrap();

        let mut event = Event::new("0x2-0");
        event.set_deposit(deposit.clone());
        event.set_event_owner(owner.clone());
        event.set_event_timestamp(BigInt::from(1_700_000_000u64));
        event.set_paid_out(true);
        event.set_total_rsvps(BigInt::from(3));
        event.set_total_confirmed_attendees(BigInt::from(2));
        event.save(&mut store).unwrap();

        let loaded = Event::load(&mut store, "0x2-0").unwrap().unwrap();
        assert_eq!(loaded.deposit(), deposit);
        assert_eq!(loaded.event_owner(), owner);
        assert_eq!(loaded.event_timestamp(), BigInt::from(1_700_000_000u64));
        assert!(loaded.paid_out());
        assert_eq!(loaded.total_rsvps(), BigInt::from(3));
        assert_eq!(loaded.total_confirmed_attendees(), BigInt::from(2));
    }

    #[test]
    fn test_optional_strings_set_and_cleared() {
        let mut store = InMemoryStore::new();
        let mut event = Event::new("0x3-0");
        event.set_name(Some("RustConf afterparty".to_string()));
        event.set_link(Some("https://example.org/rsvp".to_string()));
        event.set_image_url(Some("ipfs://bafy".to_string()));
        event.save(&mut store).unwrap();

        let mut loaded = Event::load(&mut store, "0x3-0").unwrap().unwrap();
        assert_eq!(loaded.name().as_deref(), Some("RustConf afterparty"));
        assert_eq!(loaded.image_url().as_deref(), Some("ipfs://bafy"));

        loaded.set_name(None);
        loaded.set_link(None);
        loaded.save(&mut store).unwrap();

        let stored = store.raw("Event", "0x3-0").unwrap();
        assert!(!stored.contains("name"));
        assert!(!stored.contains("link"));
        assert!(stored.contains("imageURL"));

        let reloaded = Event::load(&mut store, "0x3-0").unwrap().unwrap();
        assert_eq!(reloaded.name(), None);
        assert_eq!(reloaded.link(), None);
        assert_eq!(reloaded.description(), None);
    }

    #[test]
    fn test_empty_rsvp_list_differs_from_none() {
        let mut store = InMemoryStore::new();
        let mut event = Event::new("0x4-0");
        event.set_rsvps(Some(vec![]));
        event.save(&mut store).unwrap();

        let stored = store.raw("Event", "0x4-0").unwrap();
        assert_eq!(stored.get("rsvps"), Some(&Value::Array(vec![])));
        assert!(!stored.contains("confirmedAttendees"));

        let loaded = Event::load(&mut store, "0x4-0").unwrap().unwrap();
        assert_eq!(loaded.rsvps(), Some(vec![]));
        assert_eq!(loaded.confirmed_attendees(), None);
    }

    #[test]
    fn test_foreign_key_lists_keep_order_and_tolerate_dangling_ids() {
        let mut store = InMemoryStore::new();
        let mut event = Event::new("0x5-0");
        let rsvps = vec![
            "0x5-0-carol".to_string(),
            "0x5-0-alice".to_string(),
            "0x5-0-bob".to_string(),
        ];
        event.set_rsvps(Some(rsvps.clone()));
        event.set_confirmed_attendees(Some(vec!["0xnobody".to_string()]));
        event.save(&mut store).unwrap();

        let loaded = Event::load(&mut store, "0x5-0").unwrap().unwrap();
        assert_eq!(loaded.rsvps(), Some(rsvps));
        assert_eq!(loaded.confirmed_attendees(), Some(vec!["0xnobody".to_string()]));
    }

    #[test]
    fn test_null_optional_reads_as_none() {
        let mut event = Event::new("0x6-0");
        event.entity_mut().set("description", Value::Null);
        assert_eq!(event.description(), None);
    }

    #[test]
    fn test_schema_description() {
        assert_eq!(Event::ENTITY_TYPE, "Event");
        assert_eq!(Event::FIELDS.len(), 15);

        let required: Vec<&str> = Event::FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            required,
            vec![
                "id",
                "eventID",
                "eventOwner",
                "eventTimestamp",
                "maxCapacity",
                "deposit",
                "paidOut",
                "totalRSVPs",
                "totalConfirmedAttendees",
            ]
        );

        let paid_out = Event::FIELDS.iter().find(|f| f.name == "paidOut").unwrap();
        assert_eq!(paid_out.kind, ValueKind::Bool);
    }

    #[test]
    fn test_save_overwrites_previous_version() {
        let mut store = InMemoryStore::new();
        let mut event = Event::new("0x7-0");
        event.set_name(Some("First".to_string()));
        event.save(&mut store).unwrap();

        let mut replacement = Event::new("0x7-0");
        replacement.set_max_capacity(BigInt::from(5));
        replacement.save(&mut store).unwrap();

        let loaded = Event::load(&mut store, "0x7-0").unwrap().unwrap();
        assert_eq!(loaded.name(), None);
        assert_eq!(loaded.max_capacity(), BigInt::from(5));
    }

    #[test]
    fn test_load_missing_event() {
        let mut store = InMemoryStore::new();
        assert!(Event::load(&mut store, "0xdead-0").unwrap().is_none());
    }

    #[test]
    #[should_panic(expected = "Cannot save Event entity with non-string ID")]
    fn test_save_with_bytes_id_panics() {
        let mut store = InMemoryStore::new();
        let mut event = Event::new("0x1-0");
        event.entity_mut().set("id", Value::Bytes(Bytes::from([0x01])));
        let _ = event.save(&mut store);
    }
}
