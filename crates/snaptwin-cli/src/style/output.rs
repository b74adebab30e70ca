//! Status lines printed around command output.
//!
//! Success lines belong to the command's result and go to stdout. Errors and
//! warnings go to stderr so piped output (`get`, `list`, `export`) stays clean.

use super::colors::SemanticStyle;

/// Prints a success line with a checkmark.
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".success(), msg);
}

/// Prints an error line with an X mark to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".error(), msg);
}

/// Prints a warning line to stderr.
pub fn print_warn(msg: &str) {
    eprintln!("{} {}", "⚠".warning(), msg);
}
