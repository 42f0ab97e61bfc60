//! Content summary: a Markdown map of every document, its declared
//! metadata, and the layout the generator would pick for it, grouped by
//! folder, with a trailing list of layouts no document matches.

use crate::audit::{collect_documents, collect_layouts};
use crate::config::AuditConfig;
use crate::layout::{self, Resolution};
use crate::log;
use crate::utils::report::{FAIL, Report};
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub fn run(config: &AuditConfig, output: Option<&Path>) -> Result<()> {
    config.require_content_dir()?;

    let docs = collect_documents(config);
    log!("summary"; "summarizing {} document(s)", docs.len());

    let mut report = Report::new("Content File Summary");
    let mut used_layouts: BTreeSet<PathBuf> = BTreeSet::new();

    // Group by folder; docs are already in path order
    let mut current_folder: Option<PathBuf> = None;
    for doc in &docs {
        let folder = doc
            .content_rel
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if current_folder.as_ref() != Some(&folder) {
            let label = if folder.as_os_str().is_empty() {
                "./".to_owned()
            } else {
                folder.display().to_string()
            };
            report.push_section(&format!("📁 `{label}`"));
            current_folder = Some(folder);
        }

        let file_name = doc
            .content_rel
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        report.push(format!("- **{file_name}**: {}", doc.front_matter.title()));
        report.push(format!(
            "  - type: `{}` / layout: `{}`",
            doc.front_matter.type_name().unwrap_or("—"),
            doc.front_matter.layout().unwrap_or("—"),
        ));
        report.push(format!("  - url: `{}`", doc.url()));

        match layout::resolve(config.root(), &doc.front_matter, &doc.section, doc.kind) {
            Resolution::Found { path, .. } => {
                report.push(format!("  - matched layout: `{}`", path.display()));
                used_layouts.insert(path);
            }
            Resolution::Unresolved { .. } => {
                report.push(format!("  - {FAIL} no matching layout"));
            }
        }
    }

    push_unused_layouts(config, &used_layouts, &mut report);

    let default_output = config.root().join(&config.audit.summary_output);
    let out = output.unwrap_or(&default_output);
    report.emit("summary", Some(out))
}

/// List layout files never matched by any document.
///
/// Partials are reached by tracing, not resolution, so the partials
/// directory is left out of this check.
fn push_unused_layouts(config: &AuditConfig, used: &BTreeSet<PathBuf>, report: &mut Report) {
    let unused: Vec<PathBuf> = collect_layouts(config)
        .into_iter()
        .map(|rel| config.paths.layouts.join(rel))
        .filter(|path| !path.starts_with(&config.paths.partials))
        .filter(|path| !used.contains(path))
        .collect();

    if unused.is_empty() {
        return;
    }

    report.push_section("Unused layouts");
    for path in unused {
        report.push(format!("- `{}`", path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditConfig;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_summary_groups_and_unused() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/about.md", "---\ntitle: About\n---\n");
        write(
            dir.path(),
            "content/events/gala.md",
            "---\ntitle: Gala\ntype: event\n---\n",
        );
        write(dir.path(), "layouts/event/single.html", "<html></html>");
        write(dir.path(), "layouts/_default/single.html", "<html></html>");
        write(dir.path(), "layouts/orphan/list.html", "<html></html>");
        write(dir.path(), "layouts/partials/head.html", "");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        let out = dir.path().join("summary.md");
        run(&config, Some(&out)).unwrap();
        let text = fs::read_to_string(&out).unwrap();

        assert!(text.contains("## 📁 `./`"));
        assert!(text.contains("## 📁 `events`"));
        assert!(text.contains("**gala.md**: Gala"));
        assert!(text.contains("matched layout: `layouts/event/single.html`"));
        assert!(text.contains("  - url: `/events/gala/`"));
        // Orphan layout listed, matched and partial ones not
        assert!(text.contains("## Unused layouts"));
        assert!(text.contains("- `layouts/orphan/list.html`"));
        assert!(!text.contains("- `layouts/event/single.html`"));
        assert!(!text.contains("partials/head.html"));
    }

    #[test]
    fn test_summary_flags_unresolved() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/lost.md", "---\ntitle: Lost\n---\n");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        let out = dir.path().join("summary.md");
        run(&config, Some(&out)).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains("no matching layout"));
    }

    #[test]
    fn test_default_output_under_root() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/a.md", "---\n---\n");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        run(&config, None).unwrap();
        assert!(dir.path().join("site-summary.md").is_file());
    }
}
