//! The fixed daily slot template. A closed, ordered enumeration —
//! availability results are always a subset of it, in this order.

/// Bookable time labels for one day: a morning block and an afternoon block.
pub const SLOT_TEMPLATE: [&str; 12] = [
    "09:00 AM",
    "09:30 AM",
    "10:00 AM",
    "10:30 AM",
    "11:00 AM",
    "11:30 AM",
    "02:00 PM",
    "02:30 PM",
    "03:00 PM",
    "03:30 PM",
    "04:00 PM",
    "04:30 PM",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_twelve_distinct_labels() {
        let mut seen = std::collections::HashSet::new();
        for label in SLOT_TEMPLATE {
            assert!(seen.insert(label), "duplicate label {label}");
        }
        assert_eq!(SLOT_TEMPLATE.len(), 12);
    }
}
