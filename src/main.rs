//! Siteaudit - structure and template audits for Hugo-style static sites.

mod audit;
mod cli;
mod config;
mod frontmatter;
mod layout;
mod trace;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::AuditConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config = AuditConfig::load(root, &cli.config)?;

    match &cli.command {
        Commands::Deps => audit::deps::run(&config),
        Commands::Layouts => audit::layouts::run(&config),
        Commands::Compare { left, right } => audit::compare::run(&config, left, right),
        Commands::Css { output } => audit::css::run(&config, output.as_deref()),
        Commands::Summary { output } => audit::summary::run(&config, output.as_deref()),
    }
}
