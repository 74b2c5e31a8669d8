//! Virtualenv provisioning for scaffolded projects.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Create an isolated `venv/` inside the project directory. The caller
/// decides what a failure means; nothing is retried or rolled back here.
pub fn create(path: &Path) -> Result<()> {
    let output = Command::new("python3")
        .args(["-m", "venv", "venv"])
        .current_dir(path)
        .output()
        .context("Failed to run python3 -m venv")?;

    if !output.status.success() {
        anyhow::bail!(
            "python3 -m venv failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
