//! Encoding for list-valued text columns
//!
//! Several columns (`muscle_groups`, `equipment`, `ingredients`,
//! `food_items`) hold an ordered list of strings in a single TEXT column.
//! The stored form is `", "` separated, matching the rows already on disk.

/// Separator used in the persisted form.
pub const LIST_SEPARATOR: &str = ", ";

/// Encode an ordered list of items into its column form.
///
/// Items are trimmed; empty items are skipped.
pub fn encode_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Decode a column value back into an ordered list of items.
///
/// Tolerates plain-comma rows written by older clients.
pub fn decode_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
