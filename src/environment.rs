//! Detection of the external tools the scaffold shells out to.

use std::process::Command;

#[derive(Debug)]
pub struct ToolInfo {
    pub name: &'static str,
    pub available: bool,
    pub version: Option<String>,
}

/// Tools a scaffolded project relies on: python3 for the virtualenv,
/// git for the first commit.
pub const REQUIRED_TOOLS: &[&str] = &["python3", "git"];

/// Probe PATH for each required tool. Informational only: a missing
/// tool is reported up front but the run continues and the subprocess
/// step warns on its own when it fails.
pub fn detect() -> Vec<ToolInfo> {
    REQUIRED_TOOLS.iter().map(|&name| probe(name)).collect()
}

fn probe(name: &'static str) -> ToolInfo {
    if which::which(name).is_err() {
        return ToolInfo {
            name,
            available: false,
            version: None,
        };
    }

    let version = Command::new(name)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|version| !version.is_empty());

    ToolInfo {
        name,
        available: true,
        version,
    }
}
