//! Free-text sanitization

/// Replace every occurrence of the delimiter with a single space, then trim.
///
/// Applied only to free-form fields (messaging, additional info, campaign
/// title). Controlled-vocabulary tokens come from fixed option lists and are
/// delimiter-free by construction, so they skip this. Idempotent.
pub fn sanitize(text: &str, delimiter: char) -> String {
    text.replace(delimiter, " ").trim().to_string()
}
