//! Help overlay content from the live keymap.
//!
//! Responsibilities:
//! - Group bindings by category in declaration order.
//! - Render the grouped bindings as aligned text.
//!
//! Does NOT handle:
//! - Owning keybinding definitions (delegated to keymap).
//! - Drawing the overlay (see `ui::help`).
//!
//! Invariants:
//! - Every keymap binding appears exactly once.
//! - Rendering order is stable across runs.

use crate::input::keymap::{Category, Keymap};

/// One category worth of help rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub category: Category,
    /// `(keys, description)` pairs
    pub entries: Vec<(String, &'static str)>,
}

/// Group the keymap's bindings, adding the palette rows under `Category::Palette`.
///
/// `toggle_label` is the toggle combination as the user configured it (e.g. `Cmd+k`).
pub fn help_sections(keymap: &Keymap, toggle_label: &str) -> Vec<HelpSection> {
    Category::ORDER
        .iter()
        .filter_map(|&category| {
            let mut entries: Vec<(String, &'static str)> = keymap
                .bindings()
                .iter()
                .filter(|b| b.category == category)
                .map(|b| (b.to_string(), b.description))
                .collect();

            if category == Category::Palette {
                entries.splice(0..0, palette_entries(toggle_label));
            }

            (!entries.is_empty()).then_some(HelpSection { category, entries })
        })
        .collect()
}

fn palette_entries(toggle_label: &str) -> Vec<(String, &'static str)> {
    vec![
        (toggle_label.to_string(), "Open or close the command palette"),
        ("Up/Down".to_string(), "Move selection"),
        ("Enter".to_string(), "Run selected command"),
        ("Ctrl+u".to_string(), "Clear query"),
    ]
}

pub fn help_text(keymap: &Keymap, toggle_label: &str) -> String {
    let mut out = String::new();
    for section in help_sections(keymap, toggle_label) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(section.category.title());
        out.push('\n');
        let max_key_len = section
            .entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in &section.entries {
            let padding = max_key_len.saturating_sub(keys.chars().count()) + 2;
            out.push_str("  ");
            out.push_str(keys);
            out.push_str(&" ".repeat(padding));
            out.push_str(description);
            out.push('\n');
        }
    }
    out
}
