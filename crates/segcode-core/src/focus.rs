//! Focus handle registry
//!
//! Maps slot indices to opaque host handles used to issue "move focus to
//! slot i" commands. The table is sized once and never resized. It is a
//! resource table, not widget state: it is deliberately neither `Clone`,
//! `PartialEq` nor serializable.

use tracing::trace;

/// Host handle for one focusable slot
pub trait FocusHandle {
    /// Give keyboard focus to the slot behind this handle
    fn focus(&self);
}

impl<F: Fn()> FocusHandle for F {
    fn focus(&self) {
        self()
    }
}

/// Fixed-size table of per-slot focus handles
pub struct FocusRegistry<H> {
    handles: Box<[Option<H>]>,
    focused: Option<usize>,
}

impl<H: FocusHandle> FocusRegistry<H> {
    /// Table with `len` unpopulated entries
    pub fn new(len: usize) -> Self {
        Self {
            handles: (0..len).map(|_| None).collect(),
            focused: None,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Populate the entry for `index` as its slot mounts
    ///
    /// Returns the handle back if `index` is outside the table.
    pub fn register(&mut self, index: usize, handle: H) -> Result<(), H> {
        match self.handles.get_mut(index) {
            Some(entry) => {
                *entry = Some(handle);
                Ok(())
            }
            None => Err(handle),
        }
    }

    /// Whether a handle exists for `index`
    pub fn is_registered(&self, index: usize) -> bool {
        matches!(self.handles.get(index), Some(Some(_)))
    }

    /// Move focus to `index`
    ///
    /// A slot without a registered handle cannot take focus; the command is
    /// dropped and `false` returned.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.handles.get(index) {
            Some(Some(handle)) => {
                handle.focus();
                self.focused = Some(index);
                trace!(slot = index, "focus moved");
                true
            }
            _ => false,
        }
    }

    /// Index of the slot that last took focus
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Forget the focused slot (host moved focus elsewhere)
    pub fn blur(&mut self) {
        self.focused = None;
    }
}

impl<H> std::fmt::Debug for FocusRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusRegistry")
            .field(
                "registered",
                &self.handles.iter().filter(|h| h.is_some()).count(),
            )
            .field("len", &self.handles.len())
            .field("focused", &self.focused)
            .finish()
    }
}
