//! Layout resolution following Hugo's lookup order.
//!
//! Given a document's front matter, its section, and whether it is a list
//! or single page, build the ordered candidate list and probe the project
//! tree for the first template that exists. An exhausted candidate list is
//! an explicit [`Resolution::Unresolved`] outcome, reportable but never
//! fatal.

use crate::frontmatter::FrontMatter;
use std::fmt;
use std::path::{Path, PathBuf};

/// Page kind, driving the `<kind>.html` component of the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Leaf document.
    Single,
    /// Section index document (`_index.md`).
    List,
}

impl Kind {
    /// Classify a document by its file name.
    pub fn of_file_name(name: &str) -> Self {
        if name == "_index.md" { Self::List } else { Self::Single }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which lookup rule produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Explicit `layout` front matter key.
    Layout,
    /// Explicit `type` front matter key.
    Type,
    /// Section derived from the document's path.
    Section,
    /// `_default` fallback.
    Default,
}

impl MatchRule {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Layout => "from `layout` key",
            Self::Type => "from `type` key",
            Self::Section => "from section",
            Self::Default => "default",
        }
    }
}

/// Outcome of a layout lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// First existing candidate, path relative to the project root.
    Found { path: PathBuf, rule: MatchRule },
    /// No candidate exists on disk; carries the probed list for reporting.
    Unresolved { candidates: Vec<PathBuf> },
}

impl Resolution {
    pub fn found(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::Unresolved { .. } => None,
        }
    }
}

/// Build the ordered candidate list for a document.
///
/// Priority (first match wins; a rule contributes only when its
/// precondition key is present):
/// 1. `layout` key      → `layouts/<layout>.html`
/// 2. `type` key        → `layouts/<type>/<kind>.html`
/// 3. section           → `layouts/<section>/<kind>.html`
/// 4. fallback          → `layouts/_default/<kind>.html`
pub fn candidates(fm: &FrontMatter, section: &str, kind: Kind) -> Vec<(PathBuf, MatchRule)> {
    let mut list = Vec::with_capacity(4);

    if let Some(layout) = fm.layout() {
        list.push((PathBuf::from(format!("layouts/{layout}.html")), MatchRule::Layout));
    }
    if let Some(type_name) = fm.type_name() {
        list.push((
            PathBuf::from(format!("layouts/{type_name}/{kind}.html")),
            MatchRule::Type,
        ));
    }
    if !section.is_empty() {
        list.push((
            PathBuf::from(format!("layouts/{section}/{kind}.html")),
            MatchRule::Section,
        ));
    }
    list.push((
        PathBuf::from(format!("layouts/_default/{kind}.html")),
        MatchRule::Default,
    ));

    list
}

/// Resolve a document to the highest-priority existing template.
///
/// Returned paths are relative to `root` so they match the paths used in
/// dependency sets and reports.
pub fn resolve(root: &Path, fm: &FrontMatter, section: &str, kind: Kind) -> Resolution {
    let list = candidates(fm, section, kind);

    for (path, rule) in &list {
        if root.join(path).is_file() {
            return Resolution::Found {
                path: path.clone(),
                rule: *rule,
            };
        }
    }

    Resolution::Unresolved {
        candidates: list.into_iter().map(|(path, _)| path).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    fn fm(text: &str) -> FrontMatter {
        FrontMatter::parse(&format!("---\n{text}\n---\n"))
    }

    #[test]
    fn test_kind_of_file_name() {
        assert_eq!(Kind::of_file_name("_index.md"), Kind::List);
        assert_eq!(Kind::of_file_name("index.md"), Kind::Single);
        assert_eq!(Kind::of_file_name("post.md"), Kind::Single);
    }

    #[test]
    fn test_explicit_layout_wins() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "layouts/wide.html");
        touch(dir.path(), "layouts/event/single.html");
        touch(dir.path(), "layouts/_default/single.html");

        let res = resolve(dir.path(), &fm("layout: wide\ntype: event"), "events", Kind::Single);
        assert_eq!(
            res,
            Resolution::Found {
                path: PathBuf::from("layouts/wide.html"),
                rule: MatchRule::Layout,
            }
        );
    }

    #[test]
    fn test_type_beats_section() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "layouts/event/single.html");
        touch(dir.path(), "layouts/events/single.html");

        let res = resolve(dir.path(), &fm("type: event"), "events", Kind::Single);
        assert_eq!(res.found(), Some(Path::new("layouts/event/single.html")));
    }

    #[test]
    fn test_type_falls_through_to_section_then_default() {
        let dir = tempdir().unwrap();
        // No layouts/event/single.html on disk
        touch(dir.path(), "layouts/events/single.html");

        let res = resolve(dir.path(), &fm("type: event"), "events", Kind::Single);
        assert_eq!(res.found(), Some(Path::new("layouts/events/single.html")));

        let dir = tempdir().unwrap();
        touch(dir.path(), "layouts/_default/single.html");
        let res = resolve(dir.path(), &fm("type: event"), "events", Kind::Single);
        assert_eq!(res.found(), Some(Path::new("layouts/_default/single.html")));
    }

    #[test]
    fn test_default_fallback_for_bare_document() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "layouts/_default/list.html");

        let res = resolve(dir.path(), &FrontMatter::default(), "", Kind::List);
        assert_eq!(res.found(), Some(Path::new("layouts/_default/list.html")));
    }

    #[test]
    fn test_unresolved_reports_candidates() {
        let dir = tempdir().unwrap();

        let res = resolve(dir.path(), &fm("type: event"), "events", Kind::Single);
        let Resolution::Unresolved { candidates } = res else {
            panic!("expected unresolved");
        };
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("layouts/event/single.html"),
                PathBuf::from("layouts/events/single.html"),
                PathBuf::from("layouts/_default/single.html"),
            ]
        );
    }

    #[test]
    fn test_missing_layout_key_target_falls_through() {
        // An explicit layout pointing at a missing file falls through to
        // the remaining rules rather than failing outright.
        let dir = tempdir().unwrap();
        touch(dir.path(), "layouts/_default/single.html");

        let res = resolve(dir.path(), &fm("layout: missing"), "", Kind::Single);
        assert_eq!(res.found(), Some(Path::new("layouts/_default/single.html")));
    }
}
