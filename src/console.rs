//! Console interaction for the interactive flow.
//!
//! All prompting goes through the [`Console`] trait so the generate flow can
//! be driven by scripted input in tests. [`Terminal`] is the real
//! implementation over any `BufRead`/`Write` pair (stdin/stdout in `main`).

use crate::error::{InfragenError, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented user interaction.
pub trait Console {
    /// Show `question`, read one line, and return it with surrounding
    /// whitespace trimmed.
    ///
    /// Fails with a user error when input is closed before a line arrives.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Print a line of output.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Print a warning line.
    fn warn(&mut self, line: &str) -> Result<()>;
}

/// Console backed by a reader and a writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the terminal and return the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(console_write_error)
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).map_err(console_write_error)?;
        self.output.flush().map_err(console_write_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| {
            InfragenError::UserError(format!("failed to read from input: {}", e))
        })?;
        if read == 0 {
            return Err(InfragenError::UserError(
                "input closed before an answer was given".to_string(),
            ));
        }

        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.write_line(line)
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        self.write_line(&format!("Warning: {}", line))
    }
}

fn console_write_error(e: io::Error) -> InfragenError {
    InfragenError::WriteError(format!("failed to write to console: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_answer_and_echoes_question() {
        let mut term = terminal("  7 \n");
        let answer = term.ask("Enter your choice (1-10): ").unwrap();
        assert_eq!(answer, "7");

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output, "Enter your choice (1-10): ");
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut term = terminal("first\nsecond\n");
        assert_eq!(term.ask("a? ").unwrap(), "first");
        assert_eq!(term.ask("b? ").unwrap(), "second");
    }

    #[test]
    fn test_ask_accepts_last_line_without_newline() {
        let mut term = terminal("yaml");
        assert_eq!(term.ask("format? ").unwrap(), "yaml");
    }

    #[test]
    fn test_ask_empty_line_is_empty_answer() {
        let mut term = terminal("\n");
        assert_eq!(term.ask("q? ").unwrap(), "");
    }

    #[test]
    fn test_ask_on_closed_input_is_user_error() {
        let mut term = terminal("");
        let err = term.ask("q? ").unwrap_err();
        assert!(matches!(err, InfragenError::UserError(_)));
    }

    #[test]
    fn test_say_and_warn() {
        let mut term = terminal("");
        term.say("hello").unwrap();
        term.warn("careful").unwrap();

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output, "hello\nWarning: careful\n");
    }
}
