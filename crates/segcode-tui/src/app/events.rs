//! Event handling for the TUI
//!
//! Terminal events are read synchronously and translated into [`Action`]s.
//! Actions carry no slot index; the app applies them to the focused slot.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resized
    Resize,
    /// No input within the tick interval
    Tick,
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Paste(text) => Event::Paste(text),
            CrosstermEvent::Resize(..) => Event::Resize,
            _ => Event::Tick,
        }
    }
}

/// What an event asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Character typed into the focused slot
    Input(char),
    /// Backspace in the focused slot
    Backspace,
    /// Delete the focused slot's contents
    Clear,
    /// Move focus to the next slot
    FocusNext,
    /// Move focus to the previous slot
    FocusPrevious,
    /// Paste text over the widget
    Paste(String),
    /// Toggle help
    Help,
    /// Leave the current screen / quit
    Back,
    /// Quit immediately
    Quit,
    /// Nothing to do
    None,
}

/// Map an event to an action
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Paste(text) => Action::Paste(text.clone()),
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }
    match key.code {
        KeyCode::Esc => Action::Back,
        KeyCode::F(1) | KeyCode::Char('?') => Action::Help,
        KeyCode::Char(c) => Action::Input(c),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Clear,
        KeyCode::Right | KeyCode::Tab => Action::FocusNext,
        KeyCode::Left | KeyCode::BackTab => Action::FocusPrevious,
        _ => Action::None,
    }
}

/// Synchronous terminal event source
pub struct EventHandler {
    /// Tick rate for polling
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> io::Result<Event> {
        if event::poll(self.tick_rate)? {
            return Ok(event::read()?.into());
        }
        Ok(Event::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_map_keys() {
        assert_eq!(map_event(&key(KeyCode::Char('7'))), Action::Input('7'));
        assert_eq!(map_event(&key(KeyCode::Char('x'))), Action::Input('x'));
        assert_eq!(map_event(&key(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(map_event(&key(KeyCode::Delete)), Action::Clear);
        assert_eq!(map_event(&key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(map_event(&key(KeyCode::BackTab)), Action::FocusPrevious);
        assert_eq!(map_event(&key(KeyCode::Char('?'))), Action::Help);
        assert_eq!(map_event(&key(KeyCode::Esc)), Action::Back);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event), Action::Quit);
    }

    #[test]
    fn test_key_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&event), Action::None);
    }

    #[test]
    fn test_paste_event() {
        let event: Event = CrosstermEvent::Paste("12 34".to_string()).into();
        assert_eq!(map_event(&event), Action::Paste("12 34".to_string()));
    }
}
