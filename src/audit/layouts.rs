//! Layout alignment audit: one status line per content document.
//!
//! A lighter check than the dependency audit. It only answers "which
//! layout would the generator pick, and does that file exist", which is
//! enough to diagnose 404s and wrong-template rendering.

use crate::audit::collect_documents;
use crate::config::AuditConfig;
use crate::layout::{self, Resolution};
use crate::log;
use crate::utils::report::{FAIL, PASS, WARN};
use anyhow::Result;
use colored::Colorize;

pub fn run(config: &AuditConfig) -> Result<()> {
    config.require_content_dir()?;

    log!("layouts"; "checking layout alignment under `{}`", config.content_dir().display());

    let docs = collect_documents(config);
    let (mut found, mut missing, mut warned) = (0usize, 0usize, 0usize);

    for doc in &docs {
        let status = if !doc.readable {
            warned += 1;
            format!("{WARN} could not read file").yellow().to_string()
        } else if !doc.has_front_matter {
            warned += 1;
            format!("{WARN} no front matter").yellow().to_string()
        } else {
            match layout::resolve(config.root(), &doc.front_matter, &doc.section, doc.kind) {
                Resolution::Found { path, rule } => {
                    found += 1;
                    format!(
                        "{} `{}` ({})",
                        format!("{PASS} found layout:").green(),
                        path.display(),
                        rule.describe()
                    )
                }
                Resolution::Unresolved { .. } => {
                    missing += 1;
                    format!("{FAIL} no matching layout found").red().to_string()
                }
            }
        };

        println!("📄 `{}`\n   ↳ {status}\n", doc.content_rel.display());
    }

    log!(
        "layouts";
        "audit complete: {found} found, {missing} missing, {warned} warning(s) in {} document(s)",
        docs.len()
    );

    Ok(())
}
