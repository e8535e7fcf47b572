//! Input filtering for slot edits and paste

use crate::code::Slot;

/// Filter a proposed single-slot value
///
/// The value must be made only of ASCII digits (the empty string included).
/// An accepted value is clipped to its first character since a slot holds at
/// most one. Returns `None` when the value must be rejected.
pub fn accept_slot_value(value: &str) -> Option<Slot> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match value.chars().next() {
        Some(c) => Slot::digit(c),
        None => Some(Slot::EMPTY),
    }
}

/// Digits to overlay for a paste into an `n`-slot code
///
/// Only the first `n` characters of `text` are considered; non-digits among
/// them are discarded, the rest keep their relative order.
pub fn extract_paste_digits(text: &str, n: usize) -> Vec<char> {
    text.chars()
        .take(n)
        .filter(|c| c.is_ascii_digit())
        .collect()
}
