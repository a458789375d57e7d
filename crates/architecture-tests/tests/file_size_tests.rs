//! Architecture tests for file size limits.
//!
//! - Files >600 LOC log a warning
//! - Files >1000 LOC fail unless listed in `EXCLUDED_FILES`
//!
//! Walks every .rs file under crates/ and counts non-blank, non-comment lines.

use std::fs;
use std::path::{Path, PathBuf};

const WARNING_THRESHOLD: usize = 600;
const FAILURE_THRESHOLD: usize = 1000;

/// Files excluded from size checks, as (path_suffix, justification).
///
/// The path_suffix is matched against the end of the workspace-relative path.
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");

    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    let rust_files = find_rust_files(&crates_dir);
    let mut failures = Vec::new();
    let mut warnings = Vec::new();

    for file_path in &rust_files {
        let loc = count_loc(&fs::read_to_string(file_path).expect("Failed to read file"));
        let relative_path = file_path.strip_prefix(&workspace_root).unwrap_or(file_path);
        let relative_str = relative_path.to_string_lossy();

        let is_excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative_str.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !is_excluded {
            failures.push((relative_str.to_string(), loc));
        } else if loc > WARNING_THRESHOLD {
            warnings.push((relative_str.to_string(), loc));
        }
    }

    for (path, loc) in &warnings {
        eprintln!("[architecture] {}: {} lines (over {})", path, loc, WARNING_THRESHOLD);
    }

    if !failures.is_empty() {
        let mut error_message = format!(
            "\n=== File Size Limit Exceeded ===\n\nFiles over {} LOC:\n",
            FAILURE_THRESHOLD
        );
        for (path, loc) in &failures {
            error_message.push_str(&format!("  - {}: {} lines\n", path, loc));
        }
        error_message.push_str("\nSplit these files or add them to EXCLUDED_FILES with a reason.\n");
        panic!("{}", error_message);
    }

    eprintln!(
        "[architecture] Checked {} Rust files for size limits.",
        rust_files.len()
    );
}

/// Count lines of code, skipping blank lines, line comments and block
/// comment continuation lines.
fn count_loc(content: &str) -> usize {
    let mut count = 0;
    let mut in_block_comment = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("/*") && !trimmed.starts_with("/**") {
            in_block_comment = true;
        }
        if trimmed.ends_with("*/") {
            in_block_comment = false;
            continue;
        }
        if in_block_comment && trimmed.starts_with('*') {
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }

        count += 1;
    }

    count
}

fn find_rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

#[test]
fn test_count_loc_basic() {
    let source = r#"// This is a comment
fn main() {
    let x = 5; // inline comment

    // Another comment
    println!("Hello");
}
"#;
    assert_eq!(count_loc(source), 4);
}

#[test]
fn test_count_loc_doc_and_block_comments() {
    let source = r#"//! Module documentation

/// Function documentation
fn test() {
    /*
     * block
     */
    let x = 1;
}
"#;
    assert_eq!(count_loc(source), 4);
}

#[test]
fn test_find_rust_files_skips_target() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::create_dir_all(dir.path().join("target/debug")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "fn a() {}\n").unwrap();
    fs::write(dir.path().join("target/debug/build.rs"), "fn b() {}\n").unwrap();
    fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let files = find_rust_files(dir.path());
    assert_eq!(files, vec![dir.path().join("src/lib.rs")]);
}

#[test]
fn test_excluded_files_have_reasons() {
    for (pattern, justification) in EXCLUDED_FILES {
        assert!(!pattern.is_empty(), "Excluded file pattern must not be empty");
        assert!(
            !justification.is_empty(),
            "Justification for '{}' must not be empty",
            pattern
        );
    }
}
