// crates/cli/src/presentation.rs
use std::fmt::Write;
use std::path::Path;
use text_analyser_core::Report;

/// Render the four-line report, newline-terminated.
#[must_use]
pub fn render_report(path: &Path, report: &Report) -> String {
    let mut out = String::new();
    // String の fmt::Write は失敗しない
    let _ = writeln!(out, "File: {}", path.display());
    let _ = writeln!(out, "Words: {}", report.words);
    let _ = writeln!(out, "Lines: {}", report.lines);
    let _ = writeln!(out, "Characters: {}", report.characters);
    out
}
