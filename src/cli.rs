//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.
//!
//! Audits are advisory: findings never change the exit status. The
//! process exits non-zero only when an audit cannot run at all (missing
//! content root, unreadable config).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Structure and template audits for Hugo-style static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: siteaudit.toml, relative to root)
    #[arg(short = 'C', long, default_value = "siteaudit.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Trace each document's layout and partial dependencies, checking
    /// that the required global-styles partial is loaded
    Deps,

    /// Check that every content document resolves to an existing layout
    Layouts,

    /// Compare the content and layout structure of two sections
    Compare {
        /// first section name
        left: String,

        /// second section name
        right: String,
    },

    /// Audit the unified CSS build pipeline and generated pages
    Css {
        /// Write the Markdown report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a Markdown summary of content files and matched layouts
    Summary {
        /// Report path override (default: site-summary.md under the root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
