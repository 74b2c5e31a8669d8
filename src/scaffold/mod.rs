//! Project scaffolding - the choice record, path resolution, and the
//! template writers that materialize a new project tree.
//!
//! Every writer is a pure function of (path, choice): it overwrites its
//! one file without warning and reads nothing another writer produced.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// App types offered at the prompt.
pub const PROJECT_OPTIONS: &[&str] = &["flask", "cli"];

/// Optional libraries the user can opt into, in prompt order.
pub const OPTIONAL_LIBS: &[&str] = &["requests", "sqlalchemy"];

/// Application shape selected at the prompt.
///
/// `Django` is understood by the requirements writer but is not offered
/// by the interactive prompt; it only becomes reachable if
/// [`PROJECT_OPTIONS`] is ever widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppType {
    Flask,
    Cli,
    Django,
}

impl AppType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flask" => Some(Self::Flask),
            "cli" => Some(Self::Cli),
            "django" => Some(Self::Django),
            _ => None,
        }
    }

    /// Framework line this app type contributes to requirements.txt.
    pub fn framework(&self) -> Option<&'static str> {
        match self {
            Self::Flask => Some("flask"),
            Self::Django => Some("django"),
            Self::Cli => None,
        }
    }
}

/// Everything collected from the user for one run.
#[derive(Debug, Clone)]
pub struct ScaffoldChoice {
    pub name: String,
    pub app_type: AppType,
    /// Opted-in optional libraries, in the order the user accepted them.
    pub libs: Vec<String>,
}

/// Resolve the project name to an absolute directory under the current
/// working directory and create it. Non-destructive: an existing
/// directory is reused as-is, missing parents are created.
pub fn resolve_project_path(name: &str) -> Result<PathBuf> {
    let path = std::env::current_dir()
        .context("Failed to resolve current directory")?
        .join(name);
    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create project directory: {}", path.display()))?;
    Ok(path)
}

/// Write all template files into `path`, overwriting without warning.
pub fn generate(path: &Path, choice: &ScaffoldChoice) -> Result<()> {
    write_main(path, choice.app_type)?;
    write_requirements(path, choice.app_type, &choice.libs)?;
    write_gitignore(path)?;
    write_env(path)?;
    write_readme(path, &choice.name)?;
    write_test_stub(path)?;
    Ok(())
}

const FLASK_MAIN: &str = "from flask import Flask\n\napp = Flask(__name__)\n\n@app.route('/')\ndef hello():\n    return 'Hello from Flask!'\n\nif __name__ == '__main__':\n    app.run(debug=True)\n";

const CLI_MAIN: &str =
    "def main():\n    print('Hello from CLI app!')\n\nif __name__ == '__main__':\n    main()\n";

const GITIGNORE: &str = "__pycache__/\n*.pyc\nvenv/\n.env\n";

const ENV_FILE: &str = "FLASK_ENV=development\nSECRET_KEY=your-secret-key\n";

const TEST_STUB: &str = "def test_sample():\n    assert 1 + 1 == 2\n";

pub fn write_main(path: &Path, app_type: AppType) -> Result<()> {
    let content = match app_type {
        AppType::Flask => FLASK_MAIN,
        _ => CLI_MAIN,
    };
    write_file(&path.join("main.py"), content)
}

/// One line per dependency: the app type's framework first (when it has
/// one), then each opted-in library in opt-in order, trailing newline.
pub fn write_requirements(path: &Path, app_type: AppType, libs: &[String]) -> Result<()> {
    let mut reqs: Vec<&str> = Vec::new();
    if let Some(framework) = app_type.framework() {
        reqs.push(framework);
    }
    reqs.extend(libs.iter().map(String::as_str));
    let content = reqs.join("\n") + "\n";
    write_file(&path.join("requirements.txt"), &content)
}

pub fn write_gitignore(path: &Path) -> Result<()> {
    write_file(&path.join(".gitignore"), GITIGNORE)
}

pub fn write_env(path: &Path) -> Result<()> {
    write_file(&path.join(".env"), ENV_FILE)
}

pub fn write_readme(path: &Path, name: &str) -> Result<()> {
    let content = format!(
        "# {}\n\nGenerated with pyscaffold. Edit this README to document your project.\n",
        name
    );
    write_file(&path.join("README.md"), &content)
}

/// Creates the tests directory before writing the stub into it.
pub fn write_test_stub(path: &Path) -> Result<()> {
    let tests_dir = path.join("tests");
    fs::create_dir_all(&tests_dir)
        .with_context(|| format!("Failed to create tests directory: {}", tests_dir.display()))?;
    write_file(&tests_dir.join("test_sample.py"), TEST_STUB)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
