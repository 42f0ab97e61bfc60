//! Audit implementations, one module per subcommand.
//!
//! Every audit follows the same shape: walk the content (or public) tree,
//! apply the core resolution/tracing logic per file, and emit findings.
//! Findings never affect the exit status; the only fatal condition is a
//! missing content root, checked up front by each content-walking audit.

pub mod compare;
pub mod css;
pub mod deps;
pub mod layouts;
pub mod summary;

use crate::config::AuditConfig;
use crate::frontmatter::FrontMatter;
use crate::layout::Kind;
use crate::trace::read_lossy;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One content document, loaded once per audit run.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the project root (for reporting).
    pub rel: PathBuf,
    /// Path relative to the content root (drives section/url derivation).
    pub content_rel: PathBuf,
    /// First path segment under the content root, empty at top level.
    pub section: String,
    /// List for `_index.md`, single otherwise.
    pub kind: Kind,
    /// Parsed front matter; empty when the file was unreadable.
    pub front_matter: FrontMatter,
    /// False when the file could not be read at all.
    pub readable: bool,
    /// True when the document starts with a front matter delimiter.
    pub has_front_matter: bool,
}

impl Document {
    /// Load a document from disk. Never fails: an unreadable file yields
    /// a document with empty front matter and `readable = false`.
    pub fn load(config: &AuditConfig, path: &Path) -> Self {
        let rel = path
            .strip_prefix(config.root())
            .unwrap_or(path)
            .to_path_buf();
        let content_rel = path
            .strip_prefix(config.content_dir())
            .unwrap_or(path)
            .to_path_buf();

        let section = content_rel
            .components()
            .next()
            // A file directly under the content root has no section
            .filter(|_| content_rel.components().count() > 1)
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();

        let kind = path
            .file_name()
            .map(|name| Kind::of_file_name(&name.to_string_lossy()))
            .unwrap_or(Kind::Single);

        let (front_matter, readable, has_front_matter) = match read_lossy(path) {
            Some(text) => (
                FrontMatter::parse(&text),
                true,
                text.trim_start().starts_with("---"),
            ),
            None => (FrontMatter::default(), false, false),
        };

        Self {
            rel,
            content_rel,
            section,
            kind,
            front_matter,
            readable,
            has_front_matter,
        }
    }

    /// URL the generator would assign: an explicit `url` key, or the
    /// content-relative path without extension.
    pub fn url(&self) -> String {
        if let Some(url) = self.front_matter.get("url").filter(|u| !u.is_empty()) {
            return url.to_owned();
        }
        let stem = self.content_rel.with_extension("");
        format!("/{}/", stem.to_string_lossy().replace('\\', "/"))
    }
}

/// Collect all `.md` documents under the content root, in path order.
///
/// Ignored directory names are pruned from the walk entirely, so an
/// ignored tree is never even read.
pub fn collect_documents(config: &AuditConfig) -> Vec<Document> {
    let content_dir = config.content_dir();
    let mut docs: Vec<Document> = WalkDir::new(&content_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && config.is_ignored(&name))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(|e| Document::load(config, e.path()))
        .collect();

    docs.sort_by(|a, b| a.rel.cmp(&b.rel));
    docs
}

/// Collect all layout template files, relative to the layouts root.
pub fn collect_layouts(config: &AuditConfig) -> Vec<PathBuf> {
    let layouts_dir = config.layouts_dir();
    let mut layouts: Vec<PathBuf> = WalkDir::new(&layouts_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .filter_map(|e| {
            e.path()
                .strip_prefix(&layouts_dir)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect();

    layouts.sort();
    layouts
}
