//! Shared string helpers.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "hElLo" -> "HElLo").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a kebab-case string to camelCase (e.g., "stroke-width" -> "strokeWidth").
///
/// Empty segments are skipped, so a leading hyphen does not produce an
/// uppercase first letter: "-webkit-transform" -> "webkitTransform".
pub fn to_camel_case(s: &str) -> String {
    let mut parts = s.split('-').filter(|part| !part.is_empty());
    let mut result = match parts.next() {
        Some(first) => first.to_string(),
        None => return String::new(),
    };
    for part in parts {
        result.push_str(&capitalize(part));
    }
    result
}
