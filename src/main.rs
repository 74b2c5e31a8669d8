use anyhow::Result;
use clap::Parser;

mod commands;

/// Interactive scaffold for new Python projects. Every answer is
/// collected at the prompt; there are no flags and no non-interactive
/// mode.
#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Interactive scaffolding for new Python projects", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    commands::new::execute()
}
