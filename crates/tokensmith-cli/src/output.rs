//! Output formatting utilities.

use serde_json::Value;
use std::path::Path;
use tokensmith_core::emitter::css_value;
use tokensmith_core::BuildReport;

/// Formats the human-readable build summary.
pub fn format_summary(path: &Path, report: &BuildReport) -> String {
    let mut lines = vec![
        format!("Wrote {}", path.display()),
        format!("  Variables: {}", report.metric("variables")),
        format!("  Aliases resolved to var(--…): {}", report.metric("aliases")),
    ];
    if report.metric("mirrored") > 0 {
        lines.push(format!("  Typo mirrors: {}", report.metric("mirrored")));
    }
    if !report.skipped.is_empty() {
        lines.push(format!("  Skipped documents: {}", report.skipped.len()));
        for skipped in &report.skipped {
            lines.push(format!("    {}: {}", skipped.document, skipped.reason));
        }
    }
    if let Some(digest) = &report.digest {
        lines.push(format!("  Digest: {}", digest));
    }
    lines.join("\n")
}

/// Formats a token as a simple table row.
pub fn format_table_row(name: &str, value: &Value) -> String {
    let text = css_value(value).unwrap_or_else(|| "(not emitted)".to_string());
    format!("{:<40} {}", truncate(name, 40), text)
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<40} {}", "NAME", "VALUE");
    println!("{}", "-".repeat(60));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_row_marks_structured_values() {
        assert!(format_table_row("shadow", &json!({})).ends_with("(not emitted)"));
        assert!(format_table_row("width-100", &json!("100px")).ends_with("100px"));
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "a".repeat(50);
        let row = format_table_row(&name, &json!(1));
        assert!(row.starts_with(&format!("{}...", "a".repeat(37))));
    }

    #[test]
    fn summary_lists_skipped_documents() {
        let mut report = BuildReport::default();
        report.set_metric("variables", 2);
        report.record_skip("bad.json", "invalid JSON");
        let summary = format_summary(Path::new("out.css"), &report);
        assert!(summary.starts_with("Wrote out.css\n  Variables: 2"));
        assert!(summary.contains("    bad.json: invalid JSON"));
    }
}
