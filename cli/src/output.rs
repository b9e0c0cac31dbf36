//! CLI output helpers for consistent formatting.

use colored::Colorize;

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

pub fn warn_line(text: &str) -> String {
    format!("[{}] {}", "Warning".yellow(), text)
}

pub fn err_prefix() -> String {
    format!("{}", "Error:".red().bold())
}
