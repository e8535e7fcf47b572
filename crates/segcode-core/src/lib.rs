//! Segcode Core - Segmented one-time-code input model
//!
//! This crate holds the host-independent part of a segmented OTP input: an
//! N-slot code where each slot holds one digit, focus traversal between
//! slots, paste splitting, and a completion callback fired with the joined
//! code. Rendering and event delivery live in the host (see `segcode-tui`).
//!
//! ```
//! use segcode_core::{InputConfig, SegmentedCodeInput};
//!
//! let mut input = SegmentedCodeInput::new(InputConfig::new(4))
//!     .unwrap()
//!     .on_complete(|code| println!("entered {code}"));
//! input.mount((0..4).map(|_| || {}));
//!
//! input.paste("12-34");
//! assert_eq!(input.code().to_string(), "123_");
//! assert_eq!(input.focused(), Some(2));
//! ```

pub mod code;
pub mod component;
pub mod config;
pub mod error;
pub mod focus;
pub mod input;

pub use code::{Code, Slot};
pub use component::{CompletionCallback, Key, Outcome, SegmentedCodeInput};
pub use config::{CompletionPolicy, ContentMode, InputConfig, Presentation, SlotStyle};
pub use error::{Error, Result};
pub use focus::{FocusHandle, FocusRegistry};

/// Largest supported slot count
pub const MAX_SLOTS: usize = 32;
