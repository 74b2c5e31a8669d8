//! Interactive prompt collector.
//!
//! Generic over the input/output streams so the re-prompt loops are
//! testable against in-memory buffers; production wires stdin/stdout.
//! No other part of the tool reads from the terminal.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::scaffold::{AppType, ScaffoldChoice, OPTIONAL_LIBS, PROJECT_OPTIONS};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full question flow and assemble the choice record.
    pub fn collect_choice(&mut self) -> Result<ScaffoldChoice> {
        let name = self.ask("Project name")?;

        let answer = self.ask_option("App type (flask or cli)", PROJECT_OPTIONS)?;
        let app_type = AppType::parse(&answer)
            .ok_or_else(|| anyhow::anyhow!("Unrecognized app type: {}", answer))?;

        writeln!(self.output, "Select optional libraries (press enter to skip):")?;
        let mut libs = Vec::new();
        for lib in OPTIONAL_LIBS {
            if self.confirm(&format!("Include {}? (y/n)", lib))? {
                libs.push((*lib).to_string());
            }
        }

        Ok(ScaffoldChoice {
            name,
            app_type,
            libs,
        })
    }

    /// Ask a free-form question. The trimmed answer is accepted as-is.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read prompt answer")?;
        if read == 0 {
            anyhow::bail!("Unexpected end of input");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the trimmed answer matches one of `options`.
    pub fn ask_option(&mut self, prompt: &str, options: &[&str]) -> Result<String> {
        loop {
            let value = self.ask(prompt)?;
            if options.contains(&value.as_str()) {
                return Ok(value);
            }
            writeln!(self.output, "Please choose from {:?}.", options)?;
        }
    }

    /// Yes/no question. Only a trimmed, case-insensitive `y` affirms;
    /// anything else (including an empty line) declines.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let value = self.ask(prompt)?;
        Ok(value.eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::AppType;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_the_answer() {
        let mut p = prompter("  demo  \n");
        assert_eq!(p.ask("Project name").unwrap(), "demo");
    }

    #[test]
    fn ask_accepts_an_empty_line() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Project name").unwrap(), "");
    }

    #[test]
    fn ask_fails_at_end_of_input() {
        let mut p = prompter("");
        assert!(p.ask("Project name").is_err());
    }

    #[test]
    fn ask_option_reprompts_until_valid() {
        let mut p = prompter("django\nweb\nflask\n");
        let value = p
            .ask_option("App type (flask or cli)", &["flask", "cli"])
            .unwrap();
        assert_eq!(value, "flask");

        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches("Please choose from").count(), 2);
    }

    #[test]
    fn confirm_only_y_affirms() {
        assert!(prompter("y\n").confirm("Include requests? (y/n)").unwrap());
        assert!(prompter("Y\n").confirm("Include requests? (y/n)").unwrap());
        assert!(!prompter("yes\n").confirm("Include requests? (y/n)").unwrap());
        assert!(!prompter("n\n").confirm("Include requests? (y/n)").unwrap());
        assert!(!prompter("\n").confirm("Include requests? (y/n)").unwrap());
    }

    #[test]
    fn collect_choice_assembles_the_record() {
        let mut p = prompter("demo\nflask\nn\ny\n");
        let choice = p.collect_choice().unwrap();
        assert_eq!(choice.name, "demo");
        assert_eq!(choice.app_type, AppType::Flask);
        assert_eq!(choice.libs, vec!["sqlalchemy".to_string()]);
    }

    #[test]
    fn collect_choice_preserves_opt_in_order() {
        let mut p = prompter("tool\ncli\ny\ny\n");
        let choice = p.collect_choice().unwrap();
        assert_eq!(choice.app_type, AppType::Cli);
        assert_eq!(
            choice.libs,
            vec!["requests".to_string(), "sqlalchemy".to_string()]
        );
    }
}
