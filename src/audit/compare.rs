//! Section comparison: diff the content and layout structure of two
//! sections to explain why one renders differently from the other.

use crate::config::AuditConfig;
use crate::frontmatter::FrontMatter;
use crate::log;
use crate::trace::read_lossy;
use crate::utils::report::{FAIL, PASS, WARN};
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Structural facts gathered about one section.
#[derive(Debug, Default)]
pub struct SectionAnalysis {
    pub name: String,
    /// Which index file anchors the section, with its interpretation.
    pub content_index: Option<String>,
    /// Front matter of the index file, when readable.
    pub front_matter: FrontMatter,
    /// `layouts/<section>/list.html`, when present.
    pub layout_list: Option<PathBuf>,
    /// `layouts/<section>/single.html`, when present.
    pub layout_single: Option<PathBuf>,
    pub errors: Vec<String>,
}

/// Gather structural information about a named section.
pub fn analyze_section(config: &AuditConfig, name: &str) -> SectionAnalysis {
    let mut analysis = SectionAnalysis {
        name: name.to_owned(),
        ..Default::default()
    };

    let content_path = config.content_dir().join(name);
    if !content_path.is_dir() {
        analysis
            .errors
            .push(format!("content directory `content/{name}` not found"));
        return analysis;
    }

    // A section is anchored by _index.md (list page) or index.md (leaf bundle)
    let index_file = [
        ("_index.md", "section list page"),
        ("index.md", "leaf bundle / single page"),
    ]
    .into_iter()
    .find(|(file, _)| content_path.join(file).is_file());

    match index_file {
        Some((file, meaning)) => {
            analysis.content_index = Some(format!("{file} ({meaning})"));
            match read_lossy(&content_path.join(file)) {
                Some(text) => analysis.front_matter = FrontMatter::parse(&text),
                None => analysis.errors.push(format!("could not read `{file}`")),
            }
        }
        None => analysis
            .errors
            .push("no `_index.md` or `index.md` found".to_owned()),
    }

    let layout_dir = config.paths.layouts.join(name);
    for (slot, kind) in [
        (&mut analysis.layout_list as &mut Option<PathBuf>, "list"),
        (&mut analysis.layout_single, "single"),
    ] {
        let rel = layout_dir.join(format!("{kind}.html"));
        if config.root().join(&rel).is_file() {
            *slot = Some(rel);
        }
    }

    analysis
}

pub fn run(config: &AuditConfig, left: &str, right: &str) -> Result<()> {
    config.require_content_dir()?;

    log!("compare"; "comparing sections `{left}` and `{right}`");

    let a = analyze_section(config, left);
    let b = analyze_section(config, right);
    print_comparison(&a, &b);

    Ok(())
}

/// Print a labeled row: both values plus a match/mismatch marker.
fn print_row(label: &str, left: &str, right: &str) {
    let marker = if left == right {
        PASS.green()
    } else {
        FAIL.red()
    };
    println!("  {label:<14} {left:<32} | {right:<32} {marker}");
}

fn display(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "—".to_owned())
}

fn display_path(value: &Option<PathBuf>) -> String {
    value
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_owned())
}

fn print_comparison(a: &SectionAnalysis, b: &SectionAnalysis) {
    let rule = "-".repeat(86);

    println!("{rule}");
    println!(
        "  {:<14} {:<32} | {:<32}",
        "",
        a.name.to_uppercase().cyan(),
        b.name.to_uppercase().cyan()
    );
    println!("{rule}");

    print_row(
        "content file:",
        &display(&a.content_index),
        &display(&b.content_index),
    );
    print_row(
        "list layout:",
        &display_path(&a.layout_list),
        &display_path(&b.layout_list),
    );
    print_row(
        "single layout:",
        &display_path(&a.layout_single),
        &display_path(&b.layout_single),
    );

    // Front matter: compare the union of declared keys
    let keys: BTreeSet<&str> = a
        .front_matter
        .iter()
        .chain(b.front_matter.iter())
        .map(|(k, _)| k)
        .collect();

    if !keys.is_empty() {
        println!("{rule}");
        println!("  front matter:");
        for key in keys {
            print_row(
                &format!("  {key}:"),
                a.front_matter.get(key).unwrap_or("—"),
                b.front_matter.get(key).unwrap_or("—"),
            );
        }
    }

    let errors: Vec<(&str, &String)> = a
        .errors
        .iter()
        .map(|e| (a.name.as_str(), e))
        .chain(b.errors.iter().map(|e| (b.name.as_str(), e)))
        .collect();

    if !errors.is_empty() {
        println!("{rule}");
        for (section, error) in errors {
            println!("  {} [{section}] {error}", WARN.yellow());
        }
    }
    println!("{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_analyze_section_list_page() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/events/_index.md", "---\ntype: event\n---\n");
        write(dir.path(), "layouts/events/list.html", "<html></html>");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        let analysis = analyze_section(&config, "events");
        assert_eq!(
            analysis.content_index.as_deref(),
            Some("_index.md (section list page)")
        );
        assert_eq!(analysis.front_matter.type_name(), Some("event"));
        assert_eq!(
            analysis.layout_list,
            Some(PathBuf::from("layouts/events/list.html"))
        );
        assert_eq!(analysis.layout_single, None);
        assert!(analysis.errors.is_empty());
    }

    #[test]
    fn test_analyze_section_leaf_bundle() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/townhall/index.md", "---\ntitle: T\n---\n");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        let analysis = analyze_section(&config, "townhall");
        assert_eq!(
            analysis.content_index.as_deref(),
            Some("index.md (leaf bundle / single page)")
        );
    }

    #[test]
    fn test_analyze_missing_section() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        let analysis = analyze_section(&config, "ghost");
        assert_eq!(analysis.errors.len(), 1);
        assert!(analysis.errors[0].contains("ghost"));
        assert_eq!(analysis.content_index, None);
    }

    #[test]
    fn test_analyze_section_without_index() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/misc/note.md", "---\n---\n");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        let analysis = analyze_section(&config, "misc");
        assert!(analysis.errors[0].contains("index"));
    }

    #[test]
    fn test_run_with_both_sections() {
        let dir = tempdir().unwrap();
        write(dir.path(), "content/events/_index.md", "---\ntype: event\n---\n");
        write(dir.path(), "content/townhall/index.md", "---\n---\n");
        let config = AuditConfig::load(dir.path(), Path::new("siteaudit.toml")).unwrap();

        assert!(run(&config, "events", "townhall").is_ok());
    }
}
