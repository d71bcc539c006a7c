//! Hygiene: coding standards enforced at test time.
//!
//! These tests scan the crate's `src/` tree for antipatterns. Pointer
//! handlers must degrade to no-ops instead of crashing, so every panic
//! budget is zero. If you must add one, you have to fix an existing one
//! first. The budget never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// `(label, pattern, max occurrences)` across production sources.
const BUDGETS: &[(&str, &str, usize)] = &[
    // Panics crash the host.
    ("unwrap", ".unwrap()", 0),
    ("expect", ".expect(", 0),
    ("panic", "panic!(", 0),
    ("unreachable", "unreachable!(", 0),
    ("todo", "todo!(", 0),
    ("unimplemented", "unimplemented!(", 0),
    // Silent loss: errors discarded without inspection.
    ("silent discard", "let _ =", 0),
    ("dot ok", ".ok()", 0),
    // Style / structure.
    ("allow dead_code", "#[allow(dead_code)]", 0),
];

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "src/ scan found no engine.rs");
}

#[test]
fn antipattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (label, pattern, max) in BUDGETS {
        let hits = count_in_source(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn library_never_prints() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !f.path.ends_with("main.rs"))
        .collect();
    for pattern in ["println!(", "eprintln!(", "dbg!("] {
        let hits = count_in_source(&files, pattern);
        assert!(
            hits.is_empty(),
            "{pattern} in library code; log through tracing instead.\n{}",
            format_hits(&hits)
        );
    }
}
