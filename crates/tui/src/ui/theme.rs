//! Color themes and style builders.
//!
//! Invariants:
//! - Colors are semantically named so widgets never hard-code a palette.

use ratatui::style::{Color, Modifier, Style};

/// Which theme the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Dark => Theme {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Gray,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
                info: Color::LightBlue,
            },
            ThemeMode::Light => Theme {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                accent: Color::Blue,
                border: Color::DarkGray,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                info: Color::Magenta,
            },
        }
    }
}

/// Expanded runtime colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub info: Color,
}

impl Theme {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Accent + bold.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }
}
