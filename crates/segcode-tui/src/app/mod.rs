//! Application state and event handling

pub mod config;
pub mod events;
mod state;

pub use config::{ConfigError, TuiConfig};
pub use events::{Action, Event, EventHandler};
pub use state::{AppState, CompletionLog, Screen};

use std::rc::Rc;
use std::time::Duration;

use ratatui::prelude::*;
use segcode_core::{Key, Outcome, SegmentedCodeInput};

use crate::ui::{self, components::CursorSlot, components::SlotFocus, Theme};

/// Event poll interval
const TICK_RATE: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    /// The segmented input
    pub input: SegmentedCodeInput<SlotFocus>,

    /// Slot that holds the terminal cursor
    pub cursor: CursorSlot,

    /// Application state
    pub state: AppState,

    /// Visual theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether first-render effects have run
    mounted: bool,
}

impl App {
    /// Create a new application instance
    ///
    /// Slot focus handles are registered here; auto-focus waits for the
    /// first frame (see [`App::finish_mount`]).
    pub fn new(config: &TuiConfig) -> segcode_core::Result<Self> {
        let state = AppState::new();
        let log = Rc::clone(&state.completions);
        let cursor = CursorSlot::new();

        let mut input = SegmentedCodeInput::new(config.input.clone())?.on_complete(move |code| {
            tracing::info!(digits = code.len(), "code entered");
            log.borrow_mut().push(code.to_string());
        });
        let slots = input.slot_count();
        input.attach((0..slots).map(|index| cursor.handle(index)));

        Ok(Self {
            input,
            cursor,
            state,
            theme: config.theme(),
            should_quit: false,
            mounted: false,
        })
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let events = EventHandler::new(TICK_RATE);

        while !self.should_quit {
            let app = &*self;
            terminal.draw(|frame| ui::render(frame, app))?;
            self.finish_mount();

            let event = events.next()?;
            self.handle_event(&event);
        }

        Ok(())
    }

    /// Run first-render effects once
    pub fn finish_mount(&mut self) {
        if !self.mounted {
            self.mounted = true;
            self.input.after_mount();
        }
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        let action = events::map_event(event);

        match action {
            Action::None => return,
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Help => {
                if self.state.current_screen == Screen::Help {
                    self.state.close_help();
                } else {
                    self.state.open_help();
                }
                return;
            }
            Action::Back => {
                match self.state.current_screen {
                    Screen::Help => self.state.close_help(),
                    Screen::Entry => self.should_quit = true,
                }
                return;
            }
            _ => {}
        }

        if self.state.current_screen == Screen::Entry {
            let outcome = self.handle_entry_action(action);
            tracing::trace!(?outcome, "entry action");
            if !outcome.is_ignored() {
                self.state.clear_messages();
            }
        }
    }

    /// Apply an editing action to the focused slot
    fn handle_entry_action(&mut self, action: Action) -> Outcome {
        let slot_count = self.input.slot_count();
        let focused = self.input.focused();

        match action {
            Action::Paste(text) => self.input.paste(&text),
            Action::FocusNext => {
                let next = focused.map_or(0, |i| (i + 1).min(slot_count - 1));
                self.focus(next)
            }
            Action::FocusPrevious => {
                let previous = focused.map_or(slot_count - 1, |i| i.saturating_sub(1));
                self.focus(previous)
            }
            Action::Input(c) => match focused {
                Some(i) => self.input.edit(i, c.encode_utf8(&mut [0; 4])),
                None => Outcome::Ignored,
            },
            Action::Backspace => match focused {
                Some(i) => {
                    let was_filled = self.input.code().get(i).is_some_and(|s| s.is_filled());
                    let outcome = self.input.key(i, Key::Backspace);
                    // The field's own editing clears a filled slot
                    if was_filled {
                        self.input.edit(i, "")
                    } else {
                        outcome
                    }
                }
                None => Outcome::Ignored,
            },
            Action::Clear => match focused {
                Some(i) => self.input.edit(i, ""),
                None => Outcome::Ignored,
            },
            _ => Outcome::Ignored,
        }
    }

    fn focus(&mut self, index: usize) -> Outcome {
        if Some(index) != self.input.focused() && self.input.focus_slot(index) {
            Outcome::FocusMoved
        } else {
            Outcome::Ignored
        }
    }
}
