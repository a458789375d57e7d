//! Command palette overlay.
//!
//! Invariants:
//! - Rows are drawn in ranked order with the selection highlighted.
//! - An empty shortlist shows a placeholder, never an error.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::centered_rect;
use super::theme::Theme;
use crate::palette::PaletteController;

const PALETTE_WIDTH_PERCENT: u16 = 60;
const PALETTE_HEIGHT_PERCENT: u16 = 60;
/// Widest kind tag (`navigation`) plus a two-column gap.
const KIND_COLUMN_WIDTH: usize = 12;

pub(super) fn render_palette(f: &mut Frame, palette: &PaletteController, theme: &Theme) {
    let area = centered_rect(PALETTE_WIDTH_PERCENT, PALETTE_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .title(Span::styled("Command Palette", theme.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let prompt = if palette.query().is_empty() {
        Line::from(vec![
            Span::styled("> ", theme.title()),
            Span::styled("Type to search...", theme.text_dim()),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", theme.title()),
            Span::styled(palette.query().to_string(), theme.text()),
        ])
    };
    f.render_widget(Paragraph::new(prompt), chunks[0]);

    if palette.ranked().is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No results", theme.text_dim())),
            chunks[1],
        );
    } else {
        let items: Vec<ListItem> = palette
            .ranked()
            .iter()
            .map(|item| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:<width$}", item.kind.as_str(), width = KIND_COLUMN_WIDTH),
                        theme.text_dim(),
                    ),
                    Span::styled(item.title.clone(), theme.text()),
                ];
                if let Some(subtitle) = &item.subtitle {
                    spans.push(Span::styled(format!("  {}", subtitle), theme.text_dim()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(palette.selected_index()));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    f.render_widget(
        Paragraph::new(Line::styled(
            "↑/↓: Navigate  Enter: Execute  Esc: Close",
            theme.text_dim(),
        )),
        chunks[2],
    );
}
