//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [paths] Section Defaults
// ============================================================================

pub mod paths {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn layouts() -> PathBuf {
        "layouts".into()
    }

    pub fn partials() -> PathBuf {
        "layouts/partials".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub fn public() -> PathBuf {
        "public".into()
    }

    pub fn ignored() -> Vec<String> {
        [".git", ".hg", "node_modules", ".venv", "public", "resources"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

// ============================================================================
// [audit] Section Defaults
// ============================================================================

pub mod audit {
    use std::path::PathBuf;

    pub fn required_partial() -> PathBuf {
        "layouts/partials/extend_head.html".into()
    }

    pub fn base_template() -> PathBuf {
        "layouts/_default/baseof.html".into()
    }

    pub fn css_input() -> PathBuf {
        "assets/css/main.pcss".into()
    }

    pub fn stylesheet_pattern() -> String {
        r"^/css/(main\.(?:dev|[0-9a-f]{8,})\.css)$".into()
    }

    pub fn min_stylesheet_size() -> u64 {
        1000
    }

    pub fn summary_output() -> PathBuf {
        "site-summary.md".into()
    }
}
