//! Segcode TUI Library
//!
//! Terminal rendering and event plumbing for the segmented one-time-code
//! input from `segcode-core`: a ratatui view of the slot boxes, crossterm
//! key and bracketed-paste mapping, a themed entry screen and persisted
//! configuration.

pub mod app;
pub mod ui;

pub use app::{App, TuiConfig};
