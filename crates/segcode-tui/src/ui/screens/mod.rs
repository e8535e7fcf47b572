//! Application screens

pub mod entry;
pub mod help;
