//! Widget configuration
//!
//! All options are consumed once when the widget is built. Changing the
//! configuration means building a new widget.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};
use crate::MAX_SLOTS;

/// Default container style class
pub const DEFAULT_CONTAINER_CLASS: &str = "otp-input-container";

/// Default per-slot style class
pub const DEFAULT_SLOT_CLASS: &str = "otp-input";

/// Content mode hint
///
/// Digits are always enforced by the widget; the mode only changes how the
/// host advertises the field (numeric keypad hint, footer text).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Text,
    Number,
}

/// When the completion callback fires
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompletionPolicy {
    /// After every accepted change that leaves all slots filled, including
    /// re-edits of an already full code
    #[default]
    Level,
    /// Only when the code goes from not full to full
    Edge,
}

/// Inline style patch applied on top of the slot class
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlotStyle {
    /// Foreground colour name (e.g. "yellow", "#ffc107")
    pub fg: Option<String>,
    /// Background colour name
    pub bg: Option<String>,
    pub bold: bool,
    pub underline: bool,
}

impl SlotStyle {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Cosmetic overrides; no behavioural effect
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Presentation {
    pub container_class: String,
    pub slot_class: String,
    pub slot_style: SlotStyle,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            slot_class: DEFAULT_SLOT_CLASS.to_string(),
            slot_style: SlotStyle::default(),
        }
    }
}

/// Segmented input configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Number of slots
    pub slot_count: usize,

    /// Give slot 0 focus right after mount
    #[serde(default = "default_auto_focus")]
    pub auto_focus: bool,

    /// Reject all edits and focus moves
    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub content_mode: ContentMode,

    /// Shown in each empty slot
    #[serde(default)]
    pub placeholder: String,

    #[serde(default)]
    pub completion: CompletionPolicy,

    #[serde(default)]
    pub presentation: Presentation,
}

fn default_auto_focus() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

impl InputConfig {
    /// Configuration for `slot_count` slots with every other option defaulted
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            auto_focus: default_auto_focus(),
            disabled: false,
            content_mode: ContentMode::default(),
            placeholder: String::new(),
            completion: CompletionPolicy::default(),
            presentation: Presentation::default(),
        }
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_completion(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Check that the configuration can be mounted
    pub fn validate(&self) -> Result<()> {
        if self.slot_count == 0 {
            return Err(Error::NoSlots);
        }
        if self.slot_count > MAX_SLOTS {
            return Err(Error::TooManySlots(self.slot_count));
        }
        if self.placeholder.width() > 1 {
            return Err(Error::InvalidPlaceholder(self.placeholder.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(config.slot_count, 6);
        assert!(config.auto_focus);
        assert!(!config.disabled);
        assert_eq!(config.content_mode, ContentMode::Text);
        assert_eq!(config.placeholder, "");
        assert_eq!(config.completion, CompletionPolicy::Level);
        assert_eq!(config.presentation.container_class, "otp-input-container");
        assert_eq!(config.presentation.slot_class, "otp-input");
        assert!(config.presentation.slot_style.is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(InputConfig::new(1).validate().is_ok());
        assert_eq!(InputConfig::new(0).validate(), Err(Error::NoSlots));
        assert_eq!(
            InputConfig::new(MAX_SLOTS + 1).validate(),
            Err(Error::TooManySlots(MAX_SLOTS + 1))
        );
        assert!(InputConfig::new(4).with_placeholder("•").validate().is_ok());
        assert!(matches!(
            InputConfig::new(4).with_placeholder("--").validate(),
            Err(Error::InvalidPlaceholder(_))
        ));
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let config: InputConfig = serde_json::from_str(r#"{"slot_count": 4}"#).unwrap();
        assert_eq!(config, InputConfig::new(4));
    }

    #[test]
    fn test_config_serialization() {
        let config = InputConfig::new(8)
            .with_auto_focus(false)
            .with_content_mode(ContentMode::Number)
            .with_completion(CompletionPolicy::Edge)
            .with_placeholder("○");

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""content_mode":"number""#));
        assert!(json.contains(r#""completion":"edge""#));

        let parsed: InputConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
