use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{PractitionerRecord, Schedule};

use super::slots::SLOT_TEMPLATE;
use super::types::{AvailabilityOutcome, BookingStore};

/// Compute the free slots for a practitioner's schedule on one date.
///
/// A full-day leave empties the result outright. Otherwise the template is
/// filtered by the date's leave labels and the already-booked labels,
/// preserving template order. Deterministic: identical inputs give
/// identical, order-preserving results.
pub fn available_slots(
    schedule: &Schedule,
    date: NaiveDate,
    booked: &HashSet<String>,
) -> Vec<&'static str> {
    if schedule.is_full_day_leave(date) {
        return Vec::new();
    }

    let leave = schedule.leave_labels(date);
    SLOT_TEMPLATE
        .iter()
        .copied()
        .filter(|label| leave.map_or(true, |labels| !labels.contains(*label)))
        .filter(|label| !booked.contains(*label))
        .collect()
}

/// Read the booked set from the store and compute availability, degrading a
/// failed read to an empty slot list with the error surfaced separately.
pub fn resolve_availability<S: BookingStore>(
    store: &S,
    practitioner: &PractitionerRecord,
    date: NaiveDate,
) -> AvailabilityOutcome {
    match store.booked_labels(&practitioner.id, date) {
        Ok(booked) => AvailabilityOutcome {
            slots: available_slots(&practitioner.schedule, date, &booked),
            store_error: None,
        },
        Err(e) => {
            tracing::warn!(
                practitioner_id = %practitioner.id,
                date = %date,
                error = %e,
                "booking store read failed"
            );
            AvailabilityOutcome {
                slots: Vec::new(),
                store_error: Some(e),
            }
        }
    }
}
