use anyhow::Result;
use colored::Colorize;
use std::io;

use pyscaffold::{environment, git, scaffold, venv, Prompter};

/// End-to-end scaffolding flow: collect answers, write the tree,
/// provision the virtualenv, make the first commit, print next steps.
///
/// Subprocess failures are downgraded to warnings; only filesystem
/// errors abort the run.
pub fn execute() -> Result<()> {
    println!("🐍 Python Project Scaffold");

    println!("🔍 Checking environment...");
    for tool in environment::detect() {
        if tool.available {
            println!(
                "  ✓ {}: {}",
                tool.name,
                tool.version.as_deref().unwrap_or("detected")
            );
        } else {
            println!("  ⚠️  {}: not found on PATH", tool.name);
        }
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let choice = prompter.collect_choice()?;

    let project_path = scaffold::resolve_project_path(&choice.name)?;
    scaffold::generate(&project_path, &choice)?;
    println!("  ✓ Wrote project templates");

    match venv::create(&project_path) {
        Ok(()) => println!("  ✓ Created virtualenv"),
        Err(e) => println!("  ⚠️  Failed to create virtualenv: {:#}", e),
    }

    match git::init_repository(&project_path) {
        Ok(()) => println!("  ✓ Initialized git repository with first commit"),
        Err(e) => println!("  ⚠️  Git init failed (is git installed?): {:#}", e),
    }

    println!();
    println!(
        "{} Project '{}' created at {}",
        "✓".green(),
        choice.name,
        project_path.display()
    );
    println!("Next:");
    println!("  cd {}", choice.name);
    println!("  source venv/bin/activate");
    println!("  pip install -r requirements.txt");

    Ok(())
}
