//! The segmented code input component
//!
//! Owns the current [`Code`] snapshot and the per-slot focus handles, and
//! implements the three event handlers: single-slot edit, backspace and
//! paste. Every handler runs to completion synchronously; invalid input is
//! dropped without signalling the caller.

use tracing::{debug, trace};

use crate::code::Code;
use crate::config::{CompletionPolicy, InputConfig};
use crate::error::Result;
use crate::focus::{FocusHandle, FocusRegistry};
use crate::input::{accept_slot_value, extract_paste_digits};

/// Completion callback, called with the assembled code
pub type CompletionCallback = Box<dyn FnMut(&str)>;

/// Key pressed while a slot has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Other,
}

/// What a handler did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input dropped, nothing changed
    Ignored,
    /// Only focus moved
    FocusMoved,
    /// Code contents changed
    Updated,
    /// The completion callback fired with this code
    Completed(String),
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }

    /// The completed code, if the callback fired
    pub fn completed(&self) -> Option<&str> {
        match self {
            Outcome::Completed(code) => Some(code),
            _ => None,
        }
    }
}

/// Segmented one-time-code input
pub struct SegmentedCodeInput<H> {
    config: InputConfig,
    code: Code,
    focus: FocusRegistry<H>,
    on_complete: Option<CompletionCallback>,
}

impl<H: FocusHandle> SegmentedCodeInput<H> {
    /// Build an unmounted widget with all slots empty
    pub fn new(config: InputConfig) -> Result<Self> {
        config.validate()?;
        let n = config.slot_count;
        Ok(Self {
            config,
            code: Code::empty(n),
            focus: FocusRegistry::new(n),
            on_complete: None,
        })
    }

    /// Attach the completion callback
    pub fn on_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Register one handle per slot, in slot order, without running the
    /// first-render effects
    ///
    /// Handles beyond the slot count are dropped.
    pub fn attach(&mut self, handles: impl IntoIterator<Item = H>) {
        for (index, handle) in handles.into_iter().enumerate() {
            if self.focus.register(index, handle).is_err() {
                trace!(slot = index, "extra focus handle dropped");
                break;
            }
        }
    }

    /// Attach the handles, then run the first-render effects (auto-focus)
    pub fn mount(&mut self, handles: impl IntoIterator<Item = H>) {
        self.attach(handles);
        self.after_mount();
    }

    /// First-render effects
    pub fn after_mount(&mut self) {
        debug!(
            slots = self.config.slot_count,
            auto_focus = self.config.auto_focus,
            disabled = self.config.disabled,
            "segmented input mounted"
        );
        if self.config.auto_focus {
            self.move_focus(0);
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Current snapshot
    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn slot_count(&self) -> usize {
        self.config.slot_count
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Slot that currently has focus
    pub fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Host-driven focus change (pointer, Tab traversal)
    pub fn focus_slot(&mut self, index: usize) -> bool {
        self.move_focus(index)
    }

    /// Host moved focus away from the widget
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Replace slot `index` with the proposed `value`
    ///
    /// `value` must be empty or digits only, and is clipped to one
    /// character. A filled slot other than the last moves focus forward.
    pub fn edit(&mut self, index: usize, value: &str) -> Outcome {
        if self.config.disabled || index >= self.slot_count() {
            return Outcome::Ignored;
        }
        let Some(slot) = accept_slot_value(value) else {
            trace!(slot = index, value, "rejected slot value");
            return Outcome::Ignored;
        };

        let previous = self.code.clone();
        self.code = previous.with_slot(index, slot);

        let before = self.focused();
        let moved = slot.is_filled()
            && index + 1 < self.slot_count()
            && self.move_focus(index + 1)
            && before != Some(index + 1);

        if let Some(outcome) = self.check_completion(&previous) {
            return outcome;
        }
        if self.code != previous {
            Outcome::Updated
        } else if moved {
            Outcome::FocusMoved
        } else {
            Outcome::Ignored
        }
    }

    /// Key-down on slot `index`
    pub fn key(&mut self, index: usize, key: Key) -> Outcome {
        match key {
            Key::Backspace => self.backspace(index),
            Key::Other => Outcome::Ignored,
        }
    }

    /// Backspace on slot `index`
    ///
    /// Only moves focus back from an empty slot; clearing a filled slot is
    /// the host field's own editing, delivered as `edit(index, "")`.
    pub fn backspace(&mut self, index: usize) -> Outcome {
        if self.config.disabled || index == 0 {
            return Outcome::Ignored;
        }
        match self.code.get(index) {
            Some(slot) if slot.is_empty() => {
                if self.move_focus(index - 1) {
                    Outcome::FocusMoved
                } else {
                    Outcome::Ignored
                }
            }
            _ => Outcome::Ignored,
        }
    }

    /// Paste `text` over the widget
    ///
    /// Digits among the first N characters overwrite slots from 0 onward;
    /// later slots keep their contents. Focus goes to the highest filled
    /// slot.
    pub fn paste(&mut self, text: &str) -> Outcome {
        if self.config.disabled {
            return Outcome::Ignored;
        }
        let digits = extract_paste_digits(text, self.slot_count());
        trace!(pasted = digits.len(), "paste");

        let previous = self.code.clone();
        self.code = previous.overlay(&digits);

        let moved = match self.code.last_filled() {
            Some(last) => self.move_focus(last),
            None => false,
        };

        if let Some(outcome) = self.check_completion(&previous) {
            return outcome;
        }
        if self.code != previous {
            Outcome::Updated
        } else if moved {
            Outcome::FocusMoved
        } else {
            Outcome::Ignored
        }
    }

    fn move_focus(&mut self, index: usize) -> bool {
        if self.config.disabled {
            return false;
        }
        self.focus.focus(index)
    }

    /// Fire the callback if the current snapshot is complete and the policy
    /// allows it
    fn check_completion(&mut self, previous: &Code) -> Option<Outcome> {
        let assembled = self.code.assemble()?;
        if self.config.completion == CompletionPolicy::Edge && previous.is_complete() {
            return None;
        }
        debug!(slots = self.code.len(), "code complete");
        if let Some(callback) = self.on_complete.as_mut() {
            callback(&assembled);
        }
        Some(Outcome::Completed(assembled))
    }
}

impl<H> std::fmt::Debug for SegmentedCodeInput<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedCodeInput")
            .field("config", &self.config)
            .field("code", &self.code)
            .field("focus", &self.focus)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
