/// Fallback shown when no usable name can be derived.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Derives a greeting name from a raw stored identifier (an email address or a
/// full name).
///
/// Rules:
/// 1. Take the first non-empty segment before any `@` or whitespace
/// 2. Drop every character that is not a letter
/// 3. Capitalize: first letter upper case, the rest lower case
///
/// Falls back to [`DEFAULT_DISPLAY_NAME`] when nothing is left.
pub fn format_display_name(raw: Option<&str>) -> String {
    let letters: String = raw
        .and_then(|r| {
            r.split(|c: char| c == '@' || c.is_whitespace())
                .find(|segment| !segment.is_empty())
        })
        .map(|segment| segment.chars().filter(|c| c.is_alphabetic()).collect())
        .unwrap_or_default();

    let mut chars = letters.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => DEFAULT_DISPLAY_NAME.to_string(),
    }
}
