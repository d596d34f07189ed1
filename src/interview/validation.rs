// Post-parse validation for generated assessment reports.
// Applied between parse_report_response() and the session storing the
// report. Flags/caps implausible content from the generative model.

use crate::models::AssessmentReport;

/// Maximum plausible conditions from a single interview.
const MAX_CONDITIONS: usize = 8;

/// Maximum plausible recommendations / follow-up steps.
const MAX_LIST_ITEMS: usize = 10;

/// Result of report validation: report (possibly filtered/capped) + warnings.
#[derive(Debug, Clone)]
pub struct ReportValidation {
    pub report: AssessmentReport,
    pub warnings: Vec<String>,
}

/// Validate a decoded report for plausibility.
///
/// Drops blank entries, removes condition/specialization strings that look
/// like prompt-injection artifacts, caps excessive list lengths. Warnings
/// are informational; validation never fails.
pub fn validate_report(mut report: AssessmentReport) -> ReportValidation {
    let mut warnings = Vec::new();

    scrub_names(&mut report.possible_conditions, "possible condition", &mut warnings);
    cap_list(&mut report.possible_conditions, "possible conditions", MAX_CONDITIONS, &mut warnings);

    drop_blank(&mut report.recommendations);
    cap_list(&mut report.recommendations, "recommendations", MAX_LIST_ITEMS, &mut warnings);

    drop_blank(&mut report.follow_up_steps);
    cap_list(&mut report.follow_up_steps, "follow-up steps", MAX_LIST_ITEMS, &mut warnings);

    if let Some(specializations) = report.specializations.as_mut() {
        scrub_names(specializations, "specialization", &mut warnings);
    }

    if !warnings.is_empty() {
        tracing::warn!(
            warning_count = warnings.len(),
            "assessment report validation warnings detected"
        );
    }

    ReportValidation { report, warnings }
}

/// Remove blank entries and entries carrying injection patterns.
fn scrub_names(items: &mut Vec<String>, kind: &str, warnings: &mut Vec<String>) {
    items.retain(|item| {
        if item.trim().is_empty() {
            return false;
        }
        if contains_injection_pattern(item) {
            warnings.push(format!("{kind} with suspicious text removed"));
            return false;
        }
        true
    });
}

fn drop_blank(items: &mut Vec<String>) {
    items.retain(|item| !item.trim().is_empty());
}

fn cap_list(items: &mut Vec<String>, label: &str, max: usize, warnings: &mut Vec<String>) {
    if items.len() > max {
        warnings.push(format!("Excessive {label} ({}) capped to {max}", items.len()));
        items.truncate(max);
    }
}

/// Check if text contains prompt injection patterns.
fn contains_injection_pattern(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("ignore previous")
        || lower.contains("ignore all")
        || lower.contains("disregard")
        || lower.contains("system:")
        || lower.contains("override")
        || lower.contains("[inst]")
        || lower.contains("<instruction")
        || lower.contains("</interview")
}
