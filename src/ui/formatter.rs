//! Pure formatting functions for UI output.
//!
//! Everything the workflow says to the operator goes through here.

use console::style;

use crate::git::CommitInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a warning that does not stop the workflow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Display the commits made since the last tag.
///
/// Shows up to 10 commits; if more exist, displays the count of the rest.
///
/// # Arguments
/// * `commits` - Commits since the tag, oldest first
/// * `tag` - The tag they follow
pub fn display_commit_summary(commits: &[CommitInfo], tag: &str) {
    println!(
        "\n{}",
        style(format!("{} commits since tag '{}':", commits.len(), tag)).bold()
    );

    for commit in commits.iter().take(10) {
        let short_msg: String = commit.message.chars().take(60).collect();
        println!("  {} {}", style(&commit.hash).dim(), short_msg);
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display the commit the operator should make for the staged descriptor.
pub fn display_commit_suggestion(command: &str) {
    println!(
        "\n{} Version file staged. Commit it with:\n  {}",
        style("→").yellow(),
        style(command).cyan()
    );
}

/// Display manual push instruction for a tag.
///
/// # Arguments
/// * `tag` - The tag that was created locally
/// * `remote` - The remote name (e.g., "origin")
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
