//! Transitive partial dependency tracing for layout templates.
//!
//! Templates pull in fragments with `{{ partial "name.html" . }}` (or
//! `template`) directives. Starting from a resolved entry template, the
//! tracer walks an explicit stack with a visited set and accumulates every
//! reachable template path. The traversal is deliberately best-effort: a
//! missing or unreadable file contributes no further dependencies instead
//! of aborting the audit, since it runs over an uncontrolled tree.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Matches a partial or template invocation and captures the quoted name.
static RE_PARTIAL_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{\{-?\s*(?:partial|template)\s*["'](.*?)["']"#).unwrap());

/// Marker for a template that defines a named block.
const DEFINE_MARKER: &str = "{{ define";
/// Root document marker; templates carrying it render standalone.
const ROOT_MARKER: &str = "<html>";

/// Walks template include graphs rooted at a project directory.
///
/// All paths in and out are relative to `root`, so dependency sets can be
/// membership-tested against configured paths directly. State is scoped to
/// a single `trace` call; nothing carries over between documents.
pub struct Tracer<'a> {
    root: &'a Path,
    /// Shared wrapper implicitly included by block-only templates.
    base_template: &'a Path,
    /// Directory partial names resolve under.
    partials_dir: &'a Path,
}

impl<'a> Tracer<'a> {
    pub fn new(root: &'a Path, base_template: &'a Path, partials_dir: &'a Path) -> Self {
        Self {
            root,
            base_template,
            partials_dir,
        }
    }

    /// Collect every template transitively included by `entry`.
    ///
    /// The returned set contains `entry` itself when it exists on disk.
    /// Visiting is recorded in the same set that is returned: a path
    /// already present, or absent from disk, is a no-op.
    pub fn trace(&self, entry: &Path) -> BTreeSet<PathBuf> {
        let mut deps = BTreeSet::new();
        let mut stack = vec![entry.to_path_buf()];

        while let Some(path) = stack.pop() {
            if deps.contains(&path) || !self.root.join(&path).is_file() {
                continue;
            }

            // An unreadable node stays in the set but contributes nothing
            let Some(text) = read_lossy(&self.root.join(&path)) else {
                deps.insert(path);
                continue;
            };
            deps.insert(path);

            // Block-only templates are wrapped by the shared base template
            if uses_base_template(&text) {
                stack.push(self.base_template.to_path_buf());
            }

            for caps in RE_PARTIAL_CALL.captures_iter(&text) {
                let name = fragment_name(&caps[1]);
                if !name.is_empty() {
                    stack.push(self.partials_dir.join(name));
                }
            }
        }

        deps
    }
}

/// A template that defines a block but has no root document marker is
/// rendered through the shared base template. This is a convention of the
/// templating system under audit, kept as a single named exception rule.
pub fn uses_base_template(text: &str) -> bool {
    text.contains(DEFINE_MARKER) && !text.contains(ROOT_MARKER)
}

/// True if the template renders a full document on its own.
pub fn is_standalone(text: &str) -> bool {
    text.contains(ROOT_MARKER)
}

/// Strip trailing context arguments from a captured invocation,
/// keeping only the fragment name before the first whitespace.
fn fragment_name(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or("")
}

/// Read a file as text, tolerating invalid UTF-8.
///
/// Returns `None` on any I/O failure; callers treat that as "no further
/// dependencies from this node".
pub fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path).ok().map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
