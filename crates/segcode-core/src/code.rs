//! Code snapshots
//!
//! A [`Code`] is an immutable, fixed-length sequence of [`Slot`]s. Every
//! mutation produces a new snapshot from the old one plus a delta, so a
//! renderer holding a clone always sees a consistent view and the completion
//! check is a pure function of a single snapshot.

use std::fmt;
use std::sync::Arc;

/// A single position in the code: empty, or one ASCII digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slot(Option<char>);

impl Slot {
    /// The empty slot
    pub const EMPTY: Slot = Slot(None);

    /// Create a slot holding `c`, if `c` is an ASCII digit
    pub fn digit(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self(Some(c)))
    }

    /// The held digit, if any
    pub fn value(&self) -> Option<char> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_filled(&self) -> bool {
        self.0.is_some()
    }
}

/// Immutable N-slot code snapshot
///
/// Cloning is cheap (the slots are shared). The length is fixed at
/// construction and never changes across derived snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    slots: Arc<[Slot]>,
}

impl Code {
    /// N empty slots
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![Slot::EMPTY; len].into(),
        }
    }

    /// Build a snapshot from explicit slots
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`
    pub fn get(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.iter().copied()
    }

    /// New snapshot with slot `index` replaced
    ///
    /// An out-of-range index yields a snapshot equal to `self`.
    pub fn with_slot(&self, index: usize, slot: Slot) -> Self {
        if index >= self.len() {
            return self.clone();
        }
        let mut slots = self.slots.to_vec();
        slots[index] = slot;
        Self {
            slots: slots.into(),
        }
    }

    /// New snapshot with `digits` written from slot 0 onward
    ///
    /// Slots past the last written digit keep their previous contents.
    /// Non-digit characters and digits beyond the slot count are skipped.
    pub fn overlay(&self, digits: &[char]) -> Self {
        let mut slots = self.slots.to_vec();
        for (slot, digit) in slots
            .iter_mut()
            .zip(digits.iter().filter_map(|&c| Slot::digit(c)))
        {
            *slot = digit;
        }
        Self {
            slots: slots.into(),
        }
    }

    /// Whether every slot holds a digit
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(Slot::is_filled)
    }

    /// Number of filled slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// Highest index holding a digit
    pub fn last_filled(&self) -> Option<usize> {
        self.slots.iter().rposition(Slot::is_filled)
    }

    /// The slots joined in order, only when the code is complete
    pub fn assemble(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(self.slots.iter().filter_map(Slot::value).collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.slots.iter() {
            write!(f, "{}", slot.value().unwrap_or('_'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::from_slots(s.chars().map(|c| Slot::digit(c).unwrap_or(Slot::EMPTY)))
    }

    #[test]
    fn test_empty_code() {
        let code = Code::empty(4);
        assert_eq!(code.len(), 4);
        assert_eq!(code.filled_count(), 0);
        assert!(!code.is_complete());
        assert_eq!(code.last_filled(), None);
        assert_eq!(code.to_string(), "____");
    }

    #[test]
    fn test_slot_rejects_non_digits() {
        assert!(Slot::digit('7').is_some());
        assert!(Slot::digit('a').is_none());
        assert!(Slot::digit('٣').is_none()); // Arabic-Indic three
    }

    #[test]
    fn test_with_slot_leaves_original_untouched() {
        let before = Code::empty(3);
        let after = before.with_slot(1, Slot::digit('5').unwrap());

        assert_eq!(before.to_string(), "___");
        assert_eq!(after.to_string(), "_5_");
    }

    #[test]
    fn test_with_slot_out_of_range() {
        let before = code("1_3");
        let after = before.with_slot(3, Slot::digit('9').unwrap());
        assert_eq!(before, after);
    }

    #[test]
    fn test_overlay_keeps_tail() {
        let before = code("___9");
        let after = before.overlay(&['1', '2', '3']);
        assert_eq!(after.to_string(), "1239");
        assert!(after.is_complete());
    }

    #[test]
    fn test_overlay_truncates_to_len() {
        let after = Code::empty(2).overlay(&['1', '2', '3']);
        assert_eq!(after.to_string(), "12");
    }

    #[test]
    fn test_last_filled_is_highest_index() {
        assert_eq!(code("1__4_").last_filled(), Some(3));
        assert_eq!(code("1____").last_filled(), Some(0));
    }

    #[test]
    fn test_assemble_only_when_complete() {
        assert_eq!(code("12_").assemble(), None);
        assert_eq!(code("123").assemble(), Some("123".to_string()));
    }

    #[test]
    fn test_zero_length_is_never_complete() {
        assert!(!Code::empty(0).is_complete());
    }
}
