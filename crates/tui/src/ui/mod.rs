//! Rendering for the keydeck shell.
//!
//! Responsibilities:
//! - Lay out header, page body and footer.
//! - Draw the palette and help overlays on top when open.
//!
//! Does NOT handle:
//! - Mutating application state (rendering only reads `App`).

mod chrome;
mod help;
mod palette;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};

use crate::app::App;

pub const HEADER_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 1;

/// Draw one frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();
    f.render_widget(Block::default().style(theme.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    chrome::render_header(f, chunks[0], app, &theme);
    chrome::render_body(f, chunks[1], app, &theme);
    chrome::render_footer(f, chunks[2], app, &theme);

    if app.show_help {
        help::render_help(f, app, &theme);
    }
    if app.palette.is_open() {
        palette::render_palette(f, &app.palette, &theme);
    }
}

/// Create a centered rectangle with the given percentage of the screen size.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
