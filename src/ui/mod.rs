//! User interface module - interaction (prompts) and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - The blocking operator prompt

use std::io::{self, BufRead, Write};

use crate::error::Result;

pub mod formatter;

pub use formatter::{
    display_commit_suggestion, display_commit_summary, display_error,
    display_manual_push_instruction, display_status, display_success, display_warning,
};

/// Blocking acknowledgement from the operator
pub trait Prompt {
    /// Show `message` and wait until the operator hits Enter
    fn acknowledge(&self, message: &str) -> Result<()>;
}

/// Prompt reading a line from stdin
///
/// Reads stdin even when stdout is piped, so `release-tag | tee log` still
/// waits for the operator.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt
    }
}

impl Prompt for TerminalPrompt {
    fn acknowledge(&self, message: &str) -> Result<()> {
        read_acknowledgement(&mut io::stdin().lock(), &mut io::stdout(), message)
    }
}

/// Write `message`, then block until one line is read from `input`.
///
/// Whatever was typed is discarded; only the Enter matters. End of input
/// is an error, since nobody is there to acknowledge.
pub fn read_acknowledgement<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<()> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the prompt was acknowledged",
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_acknowledgement_writes_prompt_and_consumes_one_line() {
        let mut input = Cursor::new("\nnext answer\n");
        let mut output = Vec::new();

        read_acknowledgement(&mut input, &mut output, "Hit Enter: ").unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Hit Enter: ");
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "next answer\n");
    }

    #[test]
    fn test_acknowledgement_accepts_typed_text() {
        let mut input = Cursor::new("whatever\n");
        let mut output = Vec::new();
        assert!(read_acknowledgement(&mut input, &mut output, "> ").is_ok());
    }

    #[test]
    fn test_acknowledgement_fails_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = read_acknowledgement(&mut input, &mut output, "Hit Enter: ").unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
