pub mod environment;
pub mod git;
pub mod prompt;
pub mod scaffold;
pub mod venv;

// Re-export commonly used types
pub use prompt::Prompter;
pub use scaffold::{AppType, ScaffoldChoice};
