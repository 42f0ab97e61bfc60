//! Markdown report accumulation and emission.
//!
//! Several audits produce a Markdown document rather than (or in addition
//! to) terminal output. `Report` collects lines and either writes them to
//! a file or prints them, depending on whether an output path was given.
//! Audits are advisory, so emission never turns findings into a failure.

use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Status glyphs shared by report lines.
pub const PASS: &str = "✅";
pub const FAIL: &str = "❌";
pub const WARN: &str = "⚠️";

/// An accumulated Markdown report.
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Start a report with a top-level heading.
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![format!("# {title}"), String::new()],
        }
    }

    /// Append one line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a blank separator line.
    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append a second-level heading with surrounding blanks.
    pub fn push_section(&mut self, title: &str) {
        self.push_blank();
        self.push(format!("## {title}"));
        self.push_blank();
    }

    /// Rendered report text.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Write to `output` when given, otherwise print to stdout.
    pub fn emit(&self, module: &str, output: Option<&Path>) -> Result<()> {
        match output {
            Some(path) => {
                fs::write(path, self.render())
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                log!(module; "report written to `{}`", path.display());
            }
            None => print!("{}", self.render()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_with_heading() {
        let mut report = Report::new("CSS Build Audit");
        report.push("- first finding");
        let text = report.render();
        assert!(text.starts_with("# CSS Build Audit\n\n"));
        assert!(text.ends_with("- first finding\n"));
    }

    #[test]
    fn test_push_section() {
        let mut report = Report::new("Audit");
        report.push_section("Pipeline");
        assert!(report.render().contains("\n## Pipeline\n"));
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");

        let mut report = Report::new("Audit");
        report.push("- finding");
        report.emit("css", Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.render());
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.md");
        assert!(Report::new("Audit").emit("css", Some(&path)).is_err());
    }
}
