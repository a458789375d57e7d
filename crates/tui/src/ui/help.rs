//! Keyboard shortcuts overlay.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;
use super::theme::Theme;
use crate::app::App;
use crate::input::help::help_sections;

pub(super) fn render_help(f: &mut Frame, app: &App, theme: &Theme) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for section in help_sections(app.dispatcher.keymap(), app.toggle_label()) {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(section.category.title(), theme.title()));

        let width = section
            .entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}  ", keys), theme.info()),
                Span::styled(description, theme.text()),
            ]));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled("Keyboard Shortcuts", theme.title()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
