//! Sentence capitalization and space collapsing.

use serde_json::Value;

use crate::error::Result;
use crate::guard;

/// Capitalizes the first letter of every `.`-separated sentence.
///
/// Each segment is trimmed and rejoined with `". "`. Input with no `.` is a
/// single segment: it is trimmed, its first letter capitalized, and nothing
/// is appended.
///
/// ```
/// use netfish_core::text::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("hello.   world"), "Hello. World");
/// ```
pub fn capitalize(text: &str) -> String {
    let segments: Vec<String> = text
        .split('.')
        .map(|segment| upper_first(segment.trim()))
        .collect();

    let separator = if segments.len() > 1 { ". " } else { "" };
    segments.join(separator)
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapses runs of ASCII spaces into one and drops leading/trailing spaces.
///
/// Tabs and newlines are left alone.
pub fn remove_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`capitalize`] over a dynamic value, gated by the string guard.
pub fn capitalize_value(value: &Value) -> Result<String> {
    guard::require_string(value).map(capitalize)
}

/// [`remove_spaces`] over a dynamic value, gated by the string guard.
pub fn remove_spaces_value(value: &Value) -> Result<String> {
    guard::require_string(value).map(remove_spaces)
}
