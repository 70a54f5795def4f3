//! Human-readable progress lines.
//!
//! Colours come from `console`, which drops the escape codes when the stream
//! is not a terminal (CI logs stay readable).

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version that was settled on.
///
/// Shows either:
/// - If a previous tag is known: "From: last -> To: new"
/// - Otherwise: "Initial version: new"
pub fn display_proposed_version(last_tag: Option<&str>, new_version: &str) {
    match last_tag {
        Some(last) => {
            println!("\n{}", style("Next Version:").bold());
            println!("  From: {}", style(last).red());
            println!("  To:   {}", style(new_version).green());
        }
        None => {
            println!("\n{}", style("Initial Version:").bold());
            println!("  New version: {}", style(new_version).green());
        }
    }
}

/// List candidates that were skipped because their tag already exists.
pub fn display_skipped_candidates(skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }

    println!("{}", style("Tags already taken:").underlined());
    for candidate in skipped.iter().take(10) {
        println!("  - {}", candidate);
    }

    if skipped.len() > 10 {
        println!("  ... and {} more", skipped.len() - 10);
    }
}
