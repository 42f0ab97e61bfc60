//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for terminal output with a bracketed,
//! colored module prefix:
//!
//! ```ignore
//! log!("deps"; "auditing {} documents", count);
//! // prints: [deps] auditing 42 documents
//! ```

use colored::{ColoredString, Colorize};
use std::io::{Write, stdout};

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "deps" => prefix.bright_green().bold(),
        "layouts" => prefix.bright_blue().bold(),
        "compare" => prefix.bright_cyan().bold(),
        "css" => prefix.bright_magenta().bold(),
        "summary" => prefix.bright_yellow().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_white().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_brackets() {
        // Prefix always carries the bracketed module name, whatever the color
        for module in ["deps", "layouts", "css", "anything"] {
            let prefix = colorize_prefix(module);
            assert!(prefix.to_string().contains(&format!("[{module}]")));
        }
    }

    #[test]
    fn test_colorize_prefix_case_insensitive() {
        // "ERROR" and "error" map to the same color
        let upper = colorize_prefix("ERROR");
        let lower = colorize_prefix("error");
        assert_eq!(upper.fgcolor(), lower.fgcolor());
    }
}
