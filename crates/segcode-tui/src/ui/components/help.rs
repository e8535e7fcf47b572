//! Context-sensitive help component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::Screen;
use crate::ui::Theme;

/// Help content for each screen
pub struct HelpContent {
    /// Screen title
    pub title: &'static str,
    /// Description
    pub description: &'static str,
    /// Key bindings
    pub keys: &'static [(&'static str, &'static str)],
}

/// Get help content for a screen
pub fn help_for_screen(screen: Screen) -> HelpContent {
    match screen {
        Screen::Entry => HelpContent {
            title: "Code Entry",
            description: "Type one digit per box; focus advances automatically. Pasting \
                         fills the boxes from the left and keeps any boxes beyond the \
                         pasted digits. Non-digit characters are ignored.",
            keys: &[
                ("0-9", "Enter digit"),
                ("Backspace", "Clear / step back"),
                ("Del", "Clear box"),
                ("←/→ Tab", "Move between boxes"),
                ("Paste", "Fill from clipboard"),
                ("?", "Help"),
                ("Esc", "Quit"),
            ],
        },
        Screen::Help => HelpContent {
            title: "Help",
            description: "Press ? on the entry screen for help.",
            keys: &[("Esc", "Close help")],
        },
    }
}

/// Render help content
pub fn render_help(frame: &mut Frame, area: Rect, content: &HelpContent, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Help: {} ", content.title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Description
            Constraint::Min(3),    // Key bindings
        ])
        .split(inner);

    let desc = Paragraph::new(content.description)
        .style(theme.text())
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let keys_text: String = content
        .keys
        .iter()
        .map(|(key, action)| format!("  [{:^10}]  {}", key, action))
        .collect::<Vec<_>>()
        .join("\n");

    let keys = Paragraph::new(keys_text).style(theme.text_secondary());
    frame.render_widget(keys, chunks[1]);
}
