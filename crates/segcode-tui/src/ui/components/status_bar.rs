//! Status line component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::ui::Theme;

/// Render the completion status line
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = match (&state.status_message, state.last_completed()) {
        (Some(message), _) => Line::from(Span::styled(message.as_str(), theme.warning())),
        (None, Some(code)) => Line::from(vec![
            Span::styled("✓ Code complete: ", theme.success()),
            Span::styled(code, theme.title()),
            Span::styled(
                format!("  (fired {}×)", state.completion_count()),
                theme.text_muted(),
            ),
        ]),
        (None, None) => Line::from(Span::styled("Waiting for code…", theme.text_muted())),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
