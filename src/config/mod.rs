//! Audit configuration management for `siteaudit.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[paths]`  | Project tree layout (content, layouts, public)   |
//! | `[audit]`  | Audit rules (required partial, CSS input, sizes) |
//!
//! The config file is optional: a project that follows the conventional
//! Hugo layout needs none. CLI arguments override file values.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! content = "content"
//! layouts = "layouts"
//! ignored = [".git", "node_modules", "public"]
//!
//! [audit]
//! required_partial = "layouts/partials/extend_head.html"
//! min_stylesheet_size = 1000
//! ```

pub mod defaults;
mod error;

pub use error::ConfigError;

use regex::Regex;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing siteaudit.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Project root (set from CLI after loading)
    #[serde(skip)]
    root: PathBuf,

    /// Project tree layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// Audit rules
    #[serde(default)]
    pub audit: AuditRules,
}

/// Directory layout of the audited project, all paths relative to the root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PathsConfig {
    /// Content documents root
    #[serde(default = "defaults::paths::content")]
    pub content: PathBuf,

    /// Layout templates root
    #[serde(default = "defaults::paths::layouts")]
    pub layouts: PathBuf,

    /// Directory partial names resolve under
    #[serde(default = "defaults::paths::partials")]
    pub partials: PathBuf,

    /// Source assets root (CSS build input lives here)
    #[serde(default = "defaults::paths::assets")]
    pub assets: PathBuf,

    /// Generated site output
    #[serde(default = "defaults::paths::public")]
    pub public: PathBuf,

    /// Directory names skipped during tree walks
    #[serde(default = "defaults::paths::ignored")]
    pub ignored: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: defaults::paths::content(),
            layouts: defaults::paths::layouts(),
            partials: defaults::paths::partials(),
            assets: defaults::paths::assets(),
            public: defaults::paths::public(),
            ignored: defaults::paths::ignored(),
        }
    }
}

/// Tunable audit rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AuditRules {
    /// Partial every page is expected to load (global styles hook)
    #[serde(default = "defaults::audit::required_partial")]
    pub required_partial: PathBuf,

    /// Shared wrapper implicitly included by block-only templates
    #[serde(default = "defaults::audit::base_template")]
    pub base_template: PathBuf,

    /// Master CSS build input file
    #[serde(default = "defaults::audit::css_input")]
    pub css_input: PathBuf,

    /// Pattern a page's stylesheet href must match
    #[serde(default = "defaults::audit::stylesheet_pattern")]
    pub stylesheet_pattern: String,

    /// Minimum byte size for a built stylesheet to count as real
    #[serde(default = "defaults::audit::min_stylesheet_size")]
    pub min_stylesheet_size: u64,

    /// Default output path for the content summary report
    #[serde(default = "defaults::audit::summary_output")]
    pub summary_output: PathBuf,
}

impl Default for AuditRules {
    fn default() -> Self {
        Self {
            required_partial: defaults::audit::required_partial(),
            base_template: defaults::audit::base_template(),
            css_input: defaults::audit::css_input(),
            stylesheet_pattern: defaults::audit::stylesheet_pattern(),
            min_stylesheet_size: defaults::audit::min_stylesheet_size(),
            summary_output: defaults::audit::summary_output(),
        }
    }
}

impl AuditConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: AuditConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load from `root/<file>` if present, defaults otherwise.
    pub fn load(root: &Path, file: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(file);
        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// Get the project root directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute content directory
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.paths.content)
    }

    /// Absolute layouts directory
    pub fn layouts_dir(&self) -> PathBuf {
        self.root.join(&self.paths.layouts)
    }

    /// Absolute public (generated output) directory
    pub fn public_dir(&self) -> PathBuf {
        self.root.join(&self.paths.public)
    }

    /// True if a directory name is excluded from tree walks
    pub fn is_ignored(&self, name: &str) -> bool {
        self.paths.ignored.iter().any(|ignored| ignored == name)
    }

    /// Compile the stylesheet href pattern
    pub fn stylesheet_regex(&self) -> Result<Regex, ConfigError> {
        Ok(Regex::new(&self.audit.stylesheet_pattern)?)
    }

    /// The one fatal precondition: the content root must exist.
    ///
    /// Everything else an audit encounters is a reportable finding.
    pub fn require_content_dir(&self) -> Result<(), ConfigError> {
        let content = self.content_dir();
        if !content.is_dir() {
            return Err(ConfigError::MissingContentRoot(content));
        }
        Ok(())
    }
}
