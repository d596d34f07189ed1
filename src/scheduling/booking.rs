use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, BookingRequest};

use super::types::BookingStore;
use super::BookingError;

/// Commit a booking for a slot the caller selected from the current
/// availability.
///
/// Writes directly with status `Scheduled`; the caller's availability read
/// is the only conflict check, so two concurrent commits for the same
/// practitioner/date/label can both succeed. Store failures are surfaced
/// verbatim, with no retry.
pub fn commit_booking<S: BookingStore>(
    store: &S,
    request: &BookingRequest,
) -> Result<Appointment, BookingError> {
    let appointment = Appointment {
        id: Uuid::new_v4().to_string(),
        patient_id: request.patient_id.clone(),
        practitioner_id: request.practitioner_id.clone(),
        date: request.date,
        time_label: request.time_label.clone(),
        reason: request.reason.clone(),
        status: AppointmentStatus::Scheduled,
    };

    store.create_appointment(&appointment)?;

    tracing::info!(
        appointment_id = %appointment.id,
        practitioner_id = %appointment.practitioner_id,
        date = %appointment.date,
        time_label = %appointment.time_label,
        "appointment scheduled"
    );

    Ok(appointment)
}
