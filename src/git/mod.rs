//! Git operations for the first commit of a scaffolded project.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Initialize a repository in `path`, stage everything, and create the
/// first commit. The first failing step aborts the remaining steps;
/// files already written stay in place.
pub fn init_repository(path: &Path) -> Result<()> {
    run(path, &["init"])?;
    run(path, &["add", "."])?;
    run(path, &["commit", "-m", "Initial commit"])?;
    Ok(())
}

fn run(path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
