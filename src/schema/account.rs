use crate::entity_store::BigInt;

crate::entity! {
    /// A wallet that has RSVPed to or attended events. The id is the
    /// account address as a hex string.
    pub struct Account("Account") {
        required total_rsvps: BigInt => "totalRSVPs",
        required total_attended_events: BigInt => "totalAttendedEvents",
        /// RSVP ids made by this account
        optional rsvps: Vec<String> => "rsvps",
        optional attended_events: Vec<String> => "attendedEvents",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::InMemoryStore;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new("0xalice");

        assert_eq!(account.id(), "0xalice");
        assert_eq!(account.total_rsvps(), BigInt::from(0));
        assert_eq!(account.total_attended_events(), BigInt::from(0));
        assert_eq!(account.rsvps(), None);
        assert_eq!(account.attended_events(), None);
    }

    #[test]
    fn test_defaults_survive_save_and_load() {
        let mut store = InMemoryStore::new();
        Account::new("0xalice").save(&mut store).unwrap();

        let loaded = Account::load(&mut store, "0xalice").unwrap().unwrap();
        assert_eq!(loaded.id(), "0xalice");
        assert_eq!(loaded.total_rsvps(), BigInt::from(0));
        assert_eq!(loaded.total_attended_events(), BigInt::from(0));
        assert_eq!(loaded.rsvps(), None);
        assert_eq!(loaded.attended_events(), None);
    }

    #[test]
    fn test_counters_and_lists_round_trip() {
        let mut store = InMemoryStore::new();
        let mut account = Account::new("0xalice");
        account.set_total_rsvps(BigInt::from(2));
        account.set_total_attended_events(BigInt::from(1));
        account.set_rsvps(Some(vec!["0x1-0-0xalice".into(), "0x2-0-0xalice".into()]));
        account.set_attended_events(Some(vec!["0x1-0".into()]));
        account.save(&mut store).unwrap();

        let loaded = Account::load(&mut store, "0xalice").unwrap().unwrap();
        assert_eq!(loaded.total_rsvps(), BigInt::from(2));
        assert_eq!(loaded.total_attended_events(), BigInt::from(1));
        assert_eq!(
            loaded.rsvps(),
            Some(vec!["0x1-0-0xalice".to_string(), "0x2-0-0xalice".to_string()])
        );
        assert_eq!(loaded.attended_events(), Some(vec!["0x1-0".to_string()]));
    }

    #[test]
    fn test_clearing_list_removes_field() {
        let mut store = InMemoryStore::new();
        let mut account = Account::new("0xbob");
        account.set_attended_events(Some(vec!["0x1-0".into()]));
        account.save(&mut store).unwrap();

        account.set_attended_events(None);
        account.save(&mut store).unwrap();

        assert!(!store.raw("Account", "0xbob").unwrap().contains("attendedEvents"));
        let loaded = Account::load(&mut store, "0xbob").unwrap().unwrap();
        assert_eq!(loaded.attended_events(), None);
    }

    #[test]
    fn test_load_unknown_account() {
        let mut store = InMemoryStore::new();
        assert!(Account::load(&mut store, "0xnobody").unwrap().is_none());
    }
}
