//! Error types for segcode-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors
///
/// Editing operations never fail; invalid input is dropped. Only building a
/// widget from a bad configuration is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Slot count must be at least 1")]
    NoSlots,

    #[error("Slot count {0} exceeds maximum of {max}", max = crate::MAX_SLOTS)]
    TooManySlots(usize),

    #[error("Placeholder {0:?} must fit in a single cell")]
    InvalidPlaceholder(String),
}
