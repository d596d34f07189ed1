use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recurring leave data for one practitioner.
///
/// `full_day_leaves` blocks every slot of a date; `leave_slots` blocks the
/// named time labels only. Owned by the external directory — read-only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub full_day_leaves: HashSet<NaiveDate>,
    #[serde(default)]
    pub leave_slots: HashMap<NaiveDate, HashSet<String>>,
}

impl Schedule {
    pub fn is_full_day_leave(&self, date: NaiveDate) -> bool {
        self.full_day_leaves.contains(&date)
    }

    /// Time labels blocked on `date`, if any were recorded.
    pub fn leave_labels(&self, date: NaiveDate) -> Option<&HashSet<String>> {
        self.leave_slots.get(&date)
    }
}

/// One entry of the practitioner directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PractitionerRecord {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub schedule: Schedule,
}
