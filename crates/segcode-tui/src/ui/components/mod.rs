//! Reusable UI components

pub mod help;
pub mod segmented;
pub mod status_bar;

pub use segmented::{CursorSlot, SegmentedCodeView, SlotFocus};
