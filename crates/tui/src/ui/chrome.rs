//! Header, page body and footer.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::Theme;
use crate::action::Action;
use crate::app::App;
use crate::input::keymap::{KeyBinding, KeyPattern};
use crate::palette::registry::route_title;

pub(super) fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(" keydeck ", theme.title()),
        Span::styled(app.router.current().to_string(), theme.text()),
        Span::styled(
            format!("  [{}]", app.theme.display_name()),
            theme.text_dim(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub(super) fn render_body(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(app.page_title(), theme.title()));

    let mut lines = vec![Line::from("")];
    if let Some(status) = &app.status {
        lines.push(Line::styled(status.clone(), theme.info()));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

pub(super) fn render_footer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = match app.dispatcher.pending_leader() {
        Some(leader) => {
            let followers: Vec<String> = app
                .dispatcher
                .keymap()
                .chord_followers(leader)
                .iter()
                .map(|b| follower_hint(b))
                .collect();
            Line::from(vec![
                Span::styled(format!(" {} …  ", leader), theme.title()),
                Span::styled(followers.join("  "), theme.text_dim()),
            ])
        }
        None => Line::from(vec![Span::styled(
            format!(
                " {}: commands  ?: shortcuts  q: quit",
                app.toggle_label()
            ),
            theme.text_dim(),
        )]),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// `t Tasks` for a page chord; falls back to the binding description.
fn follower_hint(binding: &KeyBinding) -> String {
    let KeyPattern::Chord(_, follower) = binding.keys else {
        return binding.to_string();
    };
    let label = match &binding.action {
        Action::Navigate(path) => route_title(path).unwrap_or(binding.description),
        _ => binding.description,
    };
    format!("{} {}", follower, label)
}
