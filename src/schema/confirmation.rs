crate::entity! {
    /// Proof that an RSVPed account showed up to an event.
    pub struct Confirmation("Confirmation") {
        required attendee: String => "attendee",
        required event: String => "event",
    }
}
