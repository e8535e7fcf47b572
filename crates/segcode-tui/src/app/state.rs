//! Application state

use std::cell::RefCell;
use std::rc::Rc;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Code entry with the segmented input
    #[default]
    Entry,

    /// Help screen
    Help,
}

/// Codes delivered by the completion callback, oldest first
pub type CompletionLog = Rc<RefCell<Vec<String>>>;

/// Application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Screen to return to when help closes
    pub previous_screen: Option<Screen>,

    /// Shared with the completion callback
    pub completions: CompletionLog,

    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent completed code
    pub fn last_completed(&self) -> Option<String> {
        self.completions.borrow().last().cloned()
    }

    /// Number of times the completion callback fired
    pub fn completion_count(&self) -> usize {
        self.completions.borrow().len()
    }

    /// Open the help screen, remembering where we came from
    pub fn open_help(&mut self) {
        if self.current_screen != Screen::Help {
            self.previous_screen = Some(self.current_screen);
            self.current_screen = Screen::Help;
        }
    }

    /// Leave the help screen
    pub fn close_help(&mut self) {
        self.current_screen = self.previous_screen.take().unwrap_or_default();
    }

    /// Clear status messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
    }
}
