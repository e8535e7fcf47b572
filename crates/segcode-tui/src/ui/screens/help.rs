//! Help screen

use ratatui::prelude::*;

use crate::app::{App, Screen};
use crate::ui::components::help::{help_for_screen, render_help};
use crate::ui::layout::{centered_rect, render_footer, ScreenLayout};

/// Draw the help screen for the screen it was opened from
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let layout = ScreenLayout::new(area);
    let content = help_for_screen(app.state.previous_screen.unwrap_or(Screen::Entry));

    render_help(frame, centered_rect(70, 80, layout.content), &content, &app.theme);
    render_footer(frame, layout.footer, &[("Esc", "Back")], &app.theme);
}
