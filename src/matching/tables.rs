//! Condition→specialty tables. Closed enumerations; membership is product
//! data, and extending them is a data change only.

/// Safety-net specialty added to every candidate set.
pub const DEFAULT_SPECIALTY: &str = "General Physician";

/// Specialties whose name marks a generalist directory entry.
pub const GENERAL_MARKER: &str = "general";

/// Exact condition→specialty table, first resolution tier.
/// Lookups are case-insensitive.
pub static EXACT_CONDITIONS: &[(&str, &str)] = &[
    ("Migraine", "Neurologist"),
    ("Epilepsy", "Neurologist"),
    ("Stroke", "Neurologist"),
    ("Diabetes", "Endocrinologist"),
    ("Thyroid Disorder", "Endocrinologist"),
    ("Hypertension", "Cardiologist"),
    ("Heart Disease", "Cardiologist"),
    ("Arrhythmia", "Cardiologist"),
    ("Asthma", "Pulmonologist"),
    ("Pneumonia", "Pulmonologist"),
    ("Gastritis", "Gastroenterologist"),
    ("Irritable Bowel Syndrome", "Gastroenterologist"),
    ("Eczema", "Dermatologist"),
    ("Psoriasis", "Dermatologist"),
    ("Sinusitis", "ENT Specialist"),
    ("Tonsillitis", "ENT Specialist"),
    ("Arthritis", "Orthopedist"),
    ("Osteoporosis", "Orthopedist"),
];

/// One keyword rule: if the condition text contains `keyword`
/// (case-insensitive), `specialty` joins the candidate set.
pub struct KeywordRule {
    pub keyword: &'static str,
    pub specialty: &'static str,
}

const fn rule(keyword: &'static str, specialty: &'static str) -> KeywordRule {
    KeywordRule { keyword, specialty }
}

/// Keyword table, second resolution tier. Every matching rule contributes —
/// the candidate set is the union of hits, no single best pick.
pub static KEYWORD_RULES: &[KeywordRule] = &[
    // Respiratory
    rule("cough", "Pulmonologist"),
    rule("breath", "Pulmonologist"),
    rule("wheez", "Pulmonologist"),
    rule("lung", "Pulmonologist"),
    rule("asthma", "Pulmonologist"),
    rule("bronch", "Pulmonologist"),
    rule("respirat", "Pulmonologist"),
    // Cardiac
    rule("heart", "Cardiologist"),
    rule("cardiac", "Cardiologist"),
    rule("chest pain", "Cardiologist"),
    rule("palpitation", "Cardiologist"),
    rule("blood pressure", "Cardiologist"),
    rule("cholesterol", "Cardiologist"),
    // Neurological
    rule("headache", "Neurologist"),
    rule("migraine", "Neurologist"),
    rule("seizure", "Neurologist"),
    rule("dizz", "Neurologist"),
    rule("numb", "Neurologist"),
    rule("tingling", "Neurologist"),
    rule("memory", "Neurologist"),
    rule("tremor", "Neurologist"),
    // Gastrointestinal
    rule("stomach", "Gastroenterologist"),
    rule("abdominal", "Gastroenterologist"),
    rule("nausea", "Gastroenterologist"),
    rule("vomit", "Gastroenterologist"),
    rule("diarrhea", "Gastroenterologist"),
    rule("constipation", "Gastroenterologist"),
    rule("bowel", "Gastroenterologist"),
    rule("heartburn", "Gastroenterologist"),
    rule("acid reflux", "Gastroenterologist"),
    rule("indigestion", "Gastroenterologist"),
    // Ear, nose, throat
    rule("throat", "ENT Specialist"),
    rule("sinus", "ENT Specialist"),
    rule("nasal", "ENT Specialist"),
    rule("earache", "ENT Specialist"),
    rule("ear pain", "ENT Specialist"),
    rule("hearing", "ENT Specialist"),
    rule("tonsil", "ENT Specialist"),
    rule("hoarse", "ENT Specialist"),
    // Dermatological
    rule("rash", "Dermatologist"),
    rule("itch", "Dermatologist"),
    rule("skin", "Dermatologist"),
    rule("acne", "Dermatologist"),
    rule("mole", "Dermatologist"),
    rule("hives", "Dermatologist"),
    rule("blister", "Dermatologist"),
    // Orthopedic
    rule("joint", "Orthopedist"),
    rule("back pain", "Orthopedist"),
    rule("knee", "Orthopedist"),
    rule("shoulder", "Orthopedist"),
    rule("fracture", "Orthopedist"),
    rule("sprain", "Orthopedist"),
    rule("muscle", "Orthopedist"),
    rule("bone", "Orthopedist"),
    // General symptoms
    rule("fever", "General Physician"),
    rule("fatigue", "General Physician"),
    rule("cold", "General Physician"),
    rule("flu", "General Physician"),
    rule("infection", "General Physician"),
    rule("weakness", "General Physician"),
];
