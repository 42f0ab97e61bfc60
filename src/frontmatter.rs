//! Tolerant front matter parsing for content documents.
//!
//! Documents carry a leading `---`-delimited metadata block. Keys are
//! matched line by line against a pattern that accepts both YAML-style
//! (`key: value`) and TOML-style (`key = value`) assignments with optional
//! quoting. Malformed lines are skipped, never an error: a document with a
//! broken block simply has fewer recognized keys.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Front matter block delimiter.
const DELIMITER: &str = "---";

/// Matches `key: value` or `key = value`, optionally quoted.
static RE_KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s*[:=]\s*(.*?)\s*$").unwrap());

/// Parsed front matter of a single document.
///
/// Values are stored verbatim with surrounding quotes stripped. Lookup is
/// by exact key name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: BTreeMap<String, String>,
}

impl FrontMatter {
    /// Parse the leading front matter block from raw document text.
    ///
    /// Scanning starts at the first `---` line and stops at the closing
    /// one; text outside the block is ignored. A document without any
    /// block yields an empty map.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();
        let mut in_block = false;

        for line in text.lines() {
            if line.trim() == DELIMITER {
                if in_block {
                    break;
                }
                in_block = true;
                continue;
            }
            if !in_block {
                continue;
            }
            if let Some(caps) = RE_KEY_VALUE.captures(line) {
                let key = caps[1].to_owned();
                let value = strip_quotes(&caps[2]).to_owned();
                entries.entry(key).or_insert(value);
            }
        }

        Self { entries }
    }

    /// Look up a key, returning the raw value if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The explicit `layout` key, if declared.
    pub fn layout(&self) -> Option<&str> {
        self.get("layout").filter(|v| !v.is_empty())
    }

    /// The explicit `type` key, if declared.
    pub fn type_name(&self) -> Option<&str> {
        self.get("type").filter(|v| !v.is_empty())
    }

    /// Document title, falling back to "Untitled".
    pub fn title(&self) -> &str {
        self.get("title").filter(|v| !v.is_empty()).unwrap_or("Untitled")
    }

    /// True if the document declared no recognizable keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all recognized key-value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of recognized keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Strip one pair of matching single or double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_style() {
        let fm = FrontMatter::parse("---\ntitle: Hello\nlayout: wide\n---\nbody");
        assert_eq!(fm.title(), "Hello");
        assert_eq!(fm.layout(), Some("wide"));
    }

    #[test]
    fn test_parse_toml_style() {
        let fm = FrontMatter::parse("---\ntype = \"event\"\nlayout = 'plain'\n---\n");
        assert_eq!(fm.type_name(), Some("event"));
        assert_eq!(fm.layout(), Some("plain"));
    }

    #[test]
    fn test_quotes_stripped() {
        let fm = FrontMatter::parse("---\ntitle: \"Quoted Title\"\n---\n");
        assert_eq!(fm.title(), "Quoted Title");
    }

    #[test]
    fn test_no_front_matter() {
        let fm = FrontMatter::parse("just a body\nlayout: nope\n");
        assert!(fm.is_empty());
        assert_eq!(fm.layout(), None);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let fm = FrontMatter::parse("---\ntitle: ok\n%%% not a key\n- list item\ntype: page\n---\n");
        assert_eq!(fm.len(), 2);
        assert_eq!(fm.title(), "ok");
        assert_eq!(fm.type_name(), Some("page"));
    }

    #[test]
    fn test_body_keys_ignored() {
        // Keys after the closing delimiter belong to the body
        let fm = FrontMatter::parse("---\ntitle: real\n---\nlayout: fake\n");
        assert_eq!(fm.layout(), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let fm = FrontMatter::parse("---\ntitle: first\ntitle: second\n---\n");
        assert_eq!(fm.title(), "first");
    }

    #[test]
    fn test_empty_value_treated_as_absent() {
        let fm = FrontMatter::parse("---\nlayout:\ntype: \"\"\n---\n");
        assert_eq!(fm.layout(), None);
        assert_eq!(fm.type_name(), None);
    }

    #[test]
    fn test_title_fallback() {
        let fm = FrontMatter::parse("---\ntype: page\n---\n");
        assert_eq!(fm.title(), "Untitled");
    }
}
