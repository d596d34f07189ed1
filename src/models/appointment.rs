use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// A patient's request to book one slot from the current availability.
///
/// `time_label` must come from the availability the caller just computed;
/// the committer does not re-derive it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_id: String,
    pub practitioner_id: String,
    pub date: NaiveDate,
    pub time_label: String,
    pub reason: String,
}

/// A committed appointment record as written to the booking store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub practitioner_id: String,
    pub date: NaiveDate,
    pub time_label: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_serializes_status_snake_case() {
        let appointment = Appointment {
            id: "a1".into(),
            patient_id: "patient-1".into(),
            practitioner_id: "prac-1".into(),
            date: "2025-05-16".parse().unwrap(),
            time_label: "09:00 AM".into(),
            reason: "Persistent cough".into(),
            status: AppointmentStatus::Scheduled,
        };
        let json = serde_json::to_string(&appointment).unwrap();
        assert!(json.contains(r#""status":"scheduled""#));
        assert!(json.contains(r#""date":"2025-05-16""#));
    }
}
