//! CSS build pipeline audit.
//!
//! Two halves, both emitted into one Markdown report:
//!
//! - **Pipeline**: the master CSS input file exists, every `@import`
//!   inside it resolves on disk, and the `package.json` build scripts
//!   actually point at that input.
//! - **Generated pages**: every HTML file under the public directory
//!   links exactly one stylesheet matching the configured pattern, and
//!   the linked file exists with a believable size.

use crate::config::AuditConfig;
use crate::log;
use crate::trace::read_lossy;
use crate::utils::report::{FAIL, PASS, Report, WARN};
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Matches `@import "path";` inside the CSS input file.
static RE_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@import\s+["'](.*?)["']\s*;"#).unwrap());

/// Matches any `<link ...>` tag.
static RE_LINK_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<link\b[^>]*>").unwrap());

/// Extracts the href attribute from a link tag.
static RE_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).unwrap());

/// Build scripts expected to reference the CSS input.
const CSS_SCRIPTS: &[&str] = &["build:css", "watch:css"];

pub fn run(config: &AuditConfig, output: Option<&Path>) -> Result<()> {
    let mut report = Report::new("CSS Build Audit");
    let mut findings = 0usize;

    audit_pipeline(config, &mut report, &mut findings);
    audit_generated_pages(config, &mut report, &mut findings)?;

    report.push_blank();
    if findings == 0 {
        report.push(format!("{PASS} CSS build pipeline appears to be configured correctly."));
        log!("css"; "audit complete, no findings");
    } else {
        report.push(format!("{FAIL} {findings} finding(s) need attention."));
        log!("css"; "audit complete, {findings} finding(s)");
    }

    report.emit("css", output)
}

/// Check the master input file, its imports, and the package.json scripts.
fn audit_pipeline(config: &AuditConfig, report: &mut Report, findings: &mut usize) {
    report.push_section("Pipeline");

    let input_rel = &config.audit.css_input;
    let input = config.root().join(input_rel);

    let Some(content) = read_lossy(&input) else {
        report.push(format!(
            "- {FAIL} master input file `{}` is missing.",
            input_rel.display()
        ));
        *findings += 1;
        audit_package_json(config, report, findings);
        return;
    };
    report.push(format!("- {PASS} master input file `{}`.", input_rel.display()));

    let imports: Vec<&str> = RE_IMPORT
        .captures_iter(&content)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();

    if imports.is_empty() {
        report.push(format!(
            "  - {WARN} no `@import` statements found in `{}`.",
            input_rel.display()
        ));
    } else {
        report.push(format!("  - found {} import statement(s):", imports.len()));
        // Imports resolve relative to the input file's directory
        let base = input.parent().unwrap_or(config.root());
        for import in imports {
            if base.join(import).is_file() {
                report.push(format!("    - {PASS} `{import}`"));
            } else {
                report.push(format!(
                    "    - {FAIL} imports non-existent file `{import}` (expected at `{}`)",
                    base.join(import).display()
                ));
                *findings += 1;
            }
        }
    }

    audit_package_json(config, report, findings);
}

/// Verify the build scripts in package.json reference the CSS input.
fn audit_package_json(config: &AuditConfig, report: &mut Report, findings: &mut usize) {
    let pkg_path = config.root().join("package.json");
    let Some(content) = read_lossy(&pkg_path) else {
        report.push(format!(
            "- {WARN} `package.json` not found; could not verify build scripts."
        ));
        return;
    };

    let parsed: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            report.push(format!("- {FAIL} could not parse `package.json`: {err}"));
            *findings += 1;
            return;
        }
    };

    let input = config.audit.css_input.to_string_lossy().replace('\\', "/");
    for &name in CSS_SCRIPTS {
        let Some(command) = parsed["scripts"][name].as_str() else {
            continue;
        };
        if command.contains(&input) {
            report.push(format!(
                "- {PASS} `package.json` script `{name}` points at `{input}`."
            ));
        } else {
            report.push(format!(
                "- {FAIL} `package.json` script `{name}` does not use `{input}` as input."
            ));
            *findings += 1;
        }
    }
}

/// Walk the generated output and verify each page's stylesheet link.
fn audit_generated_pages(
    config: &AuditConfig,
    report: &mut Report,
    findings: &mut usize,
) -> Result<()> {
    report.push_section("Generated pages");

    let public = config.public_dir();
    if !public.is_dir() {
        report.push(format!(
            "- {WARN} public directory `{}` not found; skipping page checks.",
            config.paths.public.display()
        ));
        return Ok(());
    }

    let stylesheet_re = config.stylesheet_regex()?;
    let mut pages = 0usize;

    let mut entries: Vec<_> = WalkDir::new(&public)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .map(|e| e.into_path())
        .collect();
    entries.sort();

    for page in entries {
        pages += 1;
        let rel = page.strip_prefix(&public).unwrap_or(&page).to_path_buf();

        let Some(html) = read_lossy(&page) else {
            report.push(format!("- {FAIL} `{}`: could not read page.", rel.display()));
            *findings += 1;
            continue;
        };

        let hrefs = stylesheet_hrefs(&html);
        let ok = hrefs.iter().any(|href| {
            stylesheet_re.captures(href).is_some_and(|caps| {
                let css = public.join("css").join(&caps[1]);
                css.metadata()
                    .is_ok_and(|meta| meta.len() > config.audit.min_stylesheet_size)
            })
        });

        if ok {
            report.push(format!("- {PASS} `{}`", rel.display()));
        } else {
            report.push(format!(
                "- {FAIL} `{}`: stylesheet missing or wrong ({hrefs:?})",
                rel.display()
            ));
            *findings += 1;
        }
    }

    if pages == 0 {
        report.push(format!("- {WARN} no HTML files under `{}`.", config.paths.public.display()));
    }

    Ok(())
}

/// Hrefs of all stylesheet link tags in a page, in document order.
fn stylesheet_hrefs(html: &str) -> Vec<String> {
    RE_LINK_TAG
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| tag.contains("stylesheet"))
        .filter_map(|tag| RE_HREF.captures(tag).map(|caps| caps[1].to_owned()))
        .collect()
}
