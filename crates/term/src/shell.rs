//! Shell module - the interactive prompt loop
//!
//! Reads keypad sequences line by line, decodes each one, and reports the
//! outcome. The loop is generic over its reader and writer so tests can
//! drive it with in-memory buffers and assert on the full transcript.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use multitap_core::{decode, DecodeError};

use crate::messages;

/// Line that ends the session (matched ASCII case-insensitively).
pub const EXIT_COMMAND: &str = "x";

/// Check if a line of input should end the session.
pub fn should_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Interactive prompt loop around [`decode`].
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with plain, unstyled output.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_style(reader, writer, false)
    }

    /// Create a shell, choosing whether output lines are colored.
    ///
    /// Callers should only enable styling when the writer is a terminal.
    pub fn with_style(reader: R, writer: W, styled: bool) -> Self {
        Self {
            reader,
            writer,
            styled,
        }
    }

    /// Run the prompt loop until the exit command or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(self.writer, "{}", messages::PROMPT)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                // End of input: finish the prompt line and leave.
                writeln!(self.writer)?;
                return Ok(());
            }

            let input = line.trim_end_matches(['\r', '\n']);
            if should_exit(input) {
                return Ok(());
            }

            self.report(input)?;
            writeln!(self.writer)?;
        }
    }

    /// Decode one line and print the outcome.
    fn report(&mut self, input: &str) -> Result<()> {
        match decode(input) {
            Ok(text) => {
                if self.styled {
                    writeln!(self.writer, "{} {}", messages::RESULT_LABEL.green().bold(), text)?;
                } else {
                    writeln!(self.writer, "{} {}", messages::RESULT_LABEL, text)?;
                }
            }
            Err(err @ DecodeError::InvalidInputFormat) => {
                let message = err.to_string();
                if self.styled {
                    writeln!(self.writer, "{}", message.yellow())?;
                } else {
                    writeln!(self.writer, "{}", message)?;
                }
            }
            Err(_) => {
                writeln!(self.writer, "{}", messages::DECODE_FAILURE)?;
            }
        }
        Ok(())
    }

    /// Consume the shell and hand back its writer.
    ///
    /// Transcript tests use this to inspect everything the loop printed.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
