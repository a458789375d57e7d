//! Architecture tests for module boundaries in the keydeck TUI crate.
//!
//! Invariants:
//! - The dispatcher, palette, input, timer and record modules never touch
//!   rendering (`ratatui` or `crate::ui`), so they stay testable without a terminal.
//! - Library source never prints to stdout/stderr; the terminal is in raw
//!   mode while the app runs, so output goes through `tracing`.
//! - The config crate does not depend on the TUI crate.

use std::fs;
use std::path::{Path, PathBuf};

/// Source directories (relative to the workspace root) that must stay UI-free.
const UI_FREE_PATHS: &[&str] = &[
    "crates/tui/src/dispatcher",
    "crates/tui/src/palette",
    "crates/tui/src/input",
    "crates/tui/src/records",
    "crates/tui/src/timer.rs",
    "crates/tui/src/host.rs",
    "crates/tui/src/action.rs",
];

const UI_MARKERS: &[&str] = &["ratatui", "crate::ui"];

const PRINT_MARKERS: &[&str] = &["println!", "eprintln!", "print!(", "eprint!(", "dbg!("];

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives two levels below the workspace root")
        .to_path_buf()
}

fn rust_files(path: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Source with any `#[cfg(test)]` tail removed.
fn non_test_source(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(idx) => &content[..idx],
        None => content,
    }
}

/// Lines containing any marker, skipping comment lines.
fn offending_lines(content: &str, markers: &[&str]) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter(|(_, line)| markers.iter().any(|m| line.contains(m)))
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .collect()
}

#[test]
fn core_modules_do_not_depend_on_rendering() {
    let root = workspace_root();
    let mut violations = Vec::new();

    for rel in UI_FREE_PATHS {
        let path = root.join(rel);
        assert!(path.exists(), "{} does not exist; update UI_FREE_PATHS", rel);

        for file in rust_files(&path) {
            let content = fs::read_to_string(&file).expect("Failed to read file");
            for (line_no, line) in offending_lines(&content, UI_MARKERS) {
                violations.push(format!("{}:{}: {}", file.display(), line_no, line));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Core modules must not reference rendering:\n{}",
        violations.join("\n")
    );
}

#[test]
fn library_source_does_not_print() {
    let root = workspace_root();
    let mut violations = Vec::new();

    for dir in ["crates/tui/src", "crates/config/src"] {
        for file in rust_files(&root.join(dir)) {
            let content = fs::read_to_string(&file).expect("Failed to read file");
            for (line_no, line) in offending_lines(non_test_source(&content), PRINT_MARKERS) {
                violations.push(format!("{}:{}: {}", file.display(), line_no, line));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Use tracing instead of printing:\n{}",
        violations.join("\n")
    );
}

#[test]
fn config_crate_does_not_depend_on_tui() {
    let manifest = fs::read_to_string(workspace_root().join("crates/config/Cargo.toml"))
        .expect("Failed to read config manifest");
    assert!(
        !manifest.contains("keydeck ") && !manifest.contains("keydeck="),
        "keydeck-config must not depend on the TUI crate"
    );
}

#[test]
fn test_offending_lines_skips_comments() {
    let source = "// println! in a comment\nlet x = 1;\nprintln!(\"hi\");\n";
    let hits = offending_lines(source, PRINT_MARKERS);
    assert_eq!(hits, vec![(3, "println!(\"hi\");".to_string())]);
}

#[test]
fn test_non_test_source_cuts_test_module() {
    let source = "fn a() {}\n#[cfg(test)]\nmod tests { fn b() { println!(); } }\n";
    assert_eq!(non_test_source(source), "fn a() {}\n");
}
