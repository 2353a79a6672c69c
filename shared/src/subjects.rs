//! Subject palette
//!
//! Every companion belongs to a subject; cards and list badges are tinted
//! with the subject's color. Lookup is case-insensitive and total: subjects
//! outside the palette get a neutral gray.

/// Color for subjects that are not in the palette
pub const FALLBACK_SUBJECT_COLOR: &str = "#E5E7EB";

/// Known subjects and their colors
pub const SUBJECT_COLORS: &[(&str, &str)] = &[
    ("science", "#E5D0FF"),
    ("maths", "#FFDA6E"),
    ("language", "#BDE7FF"),
    ("coding", "#FFC8E4"),
    ("history", "#FFECC8"),
    ("economics", "#C8FFDF"),
];

/// Map a subject to its display color token (e.g. "science" -> "#E5D0FF")
pub fn subject_color(subject: &str) -> &'static str {
    let normalized = subject.trim().to_ascii_lowercase();
    let key = match normalized.as_str() {
        "math" => "maths",
        other => other,
    };

    SUBJECT_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_SUBJECT_COLOR)
}
