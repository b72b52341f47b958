/// Status output for commands.
///
/// Everything goes to stderr so stdout carries only the result JSON.
use colored::*;

/// Display a section header
pub fn section_header(title: &str) {
    eprintln!("\n{}", title.bold().cyan());
}

/// Display a success message
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Display an info message
pub fn info(message: &str) {
    eprintln!("{} {}", "●".blue(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Display a process/action message
pub fn action(message: &str) {
    eprintln!("{} {}", "▶".cyan(), message);
}

/// Tree structure item
pub fn tree_item(is_last: bool, label: &str, value: Option<&str>) {
    let prefix = if is_last { "└─" } else { "├─" };
    if let Some(val) = value {
        eprintln!("{} {}: {}", prefix.dimmed(), label, val);
    } else {
        eprintln!("{} {}", prefix.dimmed(), label);
    }
}

/// Availability marker for tree items
pub fn status_mark(ok: bool) -> String {
    if ok {
        "✓ found".green().to_string()
    } else {
        "✗ missing".red().to_string()
    }
}
