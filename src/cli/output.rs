//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print plain output (no color, for formatted records)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    print!("{}", msg);
    std::io::stdout().flush().ok();
}

/// Emphasize a name inside a status message
pub fn em(text: &str) -> String {
    text.bold().to_string()
}

/// In-flight indicator around a mutating call: `message ... ✓ ok` or `... ✗ failed`.
#[must_use = "finish the task with ok() or fail()"]
pub struct Task;

impl Task {
    pub fn start(message: &str) -> Self {
        print!("{} ... ", message);
        std::io::stdout().flush().ok();
        Task
    }

    pub fn ok(self) {
        println!("{}", "✓ ok".green());
    }

    pub fn fail(self) {
        println!("{}", "✗ failed".red());
    }
}
