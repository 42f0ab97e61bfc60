//! Dependency audit: resolve each document's layout, trace its partial
//! includes, and verify the required partial is in the include set.
//!
//! This is the deepest of the audits. Per document it prints the resolved
//! template (or the probed candidate list when nothing matched), whether
//! the layout renders standalone, and a pass/fail finding for the
//! configured required partial. Membership is exact path equality.

use crate::audit::collect_documents;
use crate::config::AuditConfig;
use crate::layout::{self, Resolution};
use crate::log;
use crate::trace::{self, Tracer};
use crate::utils::report::{FAIL, PASS, WARN};
use anyhow::Result;
use colored::Colorize;

pub fn run(config: &AuditConfig) -> Result<()> {
    config.require_content_dir()?;

    log!("deps"; "tracing layout dependencies under `{}`", config.content_dir().display());

    let docs = collect_documents(config);
    let tracer = Tracer::new(
        config.root(),
        &config.audit.base_template,
        &config.paths.partials,
    );
    let required = &config.audit.required_partial;

    let mut failures = 0usize;

    for doc in &docs {
        println!("📄 {}", doc.rel.display().to_string().cyan());

        if !doc.readable {
            println!("   {} could not read file", format!("{FAIL} ERROR:").red());
            println!();
            continue;
        }

        let resolution = layout::resolve(config.root(), &doc.front_matter, &doc.section, doc.kind);
        let entry = match resolution {
            Resolution::Found { path, rule } => {
                println!(
                    "   {} uses layout `{}` ({})",
                    "→".yellow(),
                    path.display(),
                    rule.describe()
                );
                path
            }
            Resolution::Unresolved { candidates } => {
                println!(
                    "   {} no matching layout file; probed:",
                    format!("{FAIL} ERROR:").red()
                );
                for candidate in &candidates {
                    println!("     - `{}`", candidate.display());
                }
                failures += 1;
                println!();
                continue;
            }
        };

        if let Some(text) = trace::read_lossy(&config.root().join(&entry))
            && trace::is_standalone(&text)
        {
            println!("   {} standalone layout (renders its own document)", "→".yellow());
        }

        let deps = tracer.trace(&entry);
        if deps.contains(required) {
            println!(
                "   {} loads global styles from `{}`",
                format!("{PASS} SUCCESS:").green(),
                required.display()
            );
        } else {
            println!(
                "   {} does NOT load `{}` ({} template(s) traced)",
                format!("{FAIL} NOTE:").red(),
                required.display(),
                deps.len()
            );
            failures += 1;
        }
        println!();
    }

    if failures == 0 {
        log!("deps"; "{PASS} audit complete, {} document(s) clean", docs.len());
    } else {
        log!("deps"; "{WARN} audit complete, {failures} finding(s) across {} document(s)", docs.len());
    }

    Ok(())
}
