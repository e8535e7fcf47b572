//! Code entry screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use segcode_core::ContentMode;

use crate::app::App;
use crate::ui::components::segmented::{required_width, SLOT_HEIGHT};
use crate::ui::components::status_bar::render_status_bar;
use crate::ui::components::SegmentedCodeView;
use crate::ui::layout::{centered_rect_fixed, render_footer, ScreenLayout};

/// Dialog padding around the slot row
const DIALOG_PADDING: u16 = 4;

/// Draw the code entry screen
///
/// Returns where the terminal cursor should be shown, if anywhere.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) -> Option<Position> {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);
    let config = app.input.config();

    let dialog_width = required_width(config.slot_count)
        .max(32)
        .saturating_add(DIALOG_PADDING * 2);
    let dialog = centered_rect_fixed(dialog_width, SLOT_HEIGHT + 8, layout.content);

    let border_style = if app.input.is_disabled() {
        theme.border()
    } else {
        theme.border_focused()
    };
    let block = Block::default()
        .title(" Verification Code ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),           // Instructions
            Constraint::Length(SLOT_HEIGHT), // Slots
            Constraint::Min(1),              // Hint
        ])
        .split(inner);

    let noun = match config.content_mode {
        ContentMode::Number => "numeric code",
        ContentMode::Text => "code",
    };
    let instructions = if app.input.is_disabled() {
        Paragraph::new("Input disabled").style(theme.text_muted())
    } else {
        Paragraph::new(format!("Enter the {}-digit {}", config.slot_count, noun))
            .style(theme.text_secondary())
    };
    frame.render_widget(instructions.alignment(Alignment::Center), chunks[0]);

    let view = SegmentedCodeView::new(&app.input, theme);
    let cursor = view.cursor_position(chunks[1], app.cursor.get());
    frame.render_widget(view, chunks[1]);

    let hint = Paragraph::new("digits only • paste supported")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);

    render_status_bar(frame, layout.status, &app.state, theme);
    render_footer(
        frame,
        layout.footer,
        &[("0-9", "Digit"), ("⌫", "Back"), ("?", "Help"), ("Esc", "Quit")],
        theme,
    );

    cursor
}
