use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::Appointment;

use super::BookingError;

/// Booking store abstraction (allows mocking).
///
/// The store is the only shared mutable resource in the engine; reads and
/// writes are two separate, non-atomic operations.
pub trait BookingStore: Send + Sync {
    /// Time labels already booked for a practitioner on a date.
    fn booked_labels(
        &self,
        practitioner_id: &str,
        date: NaiveDate,
    ) -> Result<HashSet<String>, BookingError>;

    /// Create a new appointment record keyed by the caller-supplied id.
    fn create_appointment(&self, appointment: &Appointment) -> Result<(), BookingError>;
}

/// Availability outcome: free slots plus a separately surfaced store read
/// error, so a failed read degrades to "no data" instead of aborting.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityOutcome {
    /// Free labels in slot-template order.
    pub slots: Vec<&'static str>,
    pub store_error: Option<BookingError>,
}
