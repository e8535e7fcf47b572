//! Visual theme, colour palette and named style classes

use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use segcode_core::config::{DEFAULT_CONTAINER_CLASS, DEFAULT_SLOT_CLASS};
use segcode_core::SlotStyle;
use serde::{Deserialize, Serialize};

/// Built-in palette selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeVariant {
    #[default]
    Dark,
    HighContrast,
}

/// Segcode colour palette
pub struct Theme {
    // Primary branding colors
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Named styles referenced by presentation classes
    classes: BTreeMap<String, Style>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Self {
            accent: Color::Rgb(0, 188, 212), // #00BCD4

            success: Color::Rgb(76, 175, 80), // #4CAF50
            warning: Color::Rgb(255, 152, 0), // #FF9800

            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(0, 188, 212),   // #00BCD4
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575

            classes: BTreeMap::new(),
        };
        theme.register_default_classes();
        theme
    }
}

impl Theme {
    /// Create a theme for the given variant
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::HighContrast => Self::high_contrast(),
        }
    }

    /// Create a dark theme variant
    pub fn dark() -> Self {
        Self::default()
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        let mut theme = Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            accent: Color::Yellow,
            ..Self::default()
        };
        theme.register_default_classes();
        theme
    }

    fn register_default_classes(&mut self) {
        self.classes
            .insert(DEFAULT_CONTAINER_CLASS.to_string(), Style::default());
        self.classes.insert(
            DEFAULT_SLOT_CLASS.to_string(),
            Style::default()
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD),
        );
    }

    /// Add or replace named classes from configuration
    ///
    /// Class definitions patch the existing class of the same name, so a
    /// user entry for "otp-input" that only sets `fg` keeps the bold default.
    pub fn with_classes<'a>(
        mut self,
        classes: impl IntoIterator<Item = (&'a String, &'a SlotStyle)>,
    ) -> Self {
        for (name, patch) in classes {
            let base = self.class(name);
            self.classes.insert(name.clone(), apply_patch(base, patch));
        }
        self
    }

    /// Style for a named class; unknown names resolve to the empty style
    pub fn class(&self, name: &str) -> Style {
        self.classes.get(name).copied().unwrap_or_default()
    }

    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get key hint style
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a slot box
    pub fn slot_border(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            self.text_muted()
        } else if focused {
            self.border_focused()
        } else {
            self.border()
        }
    }

    /// Style for a slot's placeholder glyph
    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for a slot's digit when the widget is disabled
    pub fn slot_disabled(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }
}

/// Apply an inline style patch on top of `base`
///
/// Colour names that do not parse are ignored.
pub fn apply_patch(base: Style, patch: &SlotStyle) -> Style {
    let mut style = base;
    if let Some(fg) = patch.fg.as_deref().and_then(|c| Color::from_str(c).ok()) {
        style = style.fg(fg);
    }
    if let Some(bg) = patch.bg.as_deref().and_then(|c| Color::from_str(c).ok()) {
        style = style.bg(bg);
    }
    if patch.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if patch.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}
