//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function - delegates to appropriate screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.state.current_screen {
        Screen::Entry => {
            if let Some(position) = screens::entry::draw(frame, area, app) {
                frame.set_cursor_position(position);
            }
        }
        Screen::Help => screens::help::draw(frame, area, app),
    }
}
