//! Styled console output for the interactive session.
//!
//! All output goes through a queued crossterm command buffer on a generic
//! writer, so tests can capture it in a `Vec<u8>` while the binary hands in
//! a locked stdout. Each message keeps its text in a single `Print` so the
//! styling codes never split a line a test (or a human) wants to read.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

const SPLASH: &str = "\
********************************************************

  Ten-Pin Bowling score calculator.

********************************************************
";

const INSTRUCTIONS: &str = "\
This application will read input to simulate a single game of American
Ten-Pin Bowling. Please input a string representing all the frames of a
single game in order to obtain their scores.

'X' indicates a strike, '/' indicates a spare, '-' indicates a miss, and
a number indicates the number of pins knocked down in the roll.
";

const SEPARATOR: &str = "---------------------------------------------------------";

/// Queued, styled writer for every message the session prints.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Splash banner followed by the instruction paragraph.
    pub fn greeting(&mut self) -> Result<()> {
        self.out.queue(SetForegroundColor(Color::Cyan))?;
        self.out.queue(Print(SPLASH))?;
        self.out.queue(ResetColor)?;
        self.out.queue(Print("\n"))?;
        self.out.queue(Print(INSTRUCTIONS))?;
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompt for a game line; no newline, the cursor waits on the answer.
    pub fn prompt(&mut self) -> Result<()> {
        self.out.queue(Print("Enter input: "))?;
        self.out.flush()?;
        Ok(())
    }

    /// Reprompt after a line with characters outside the alphabet.
    pub fn reprompt(&mut self) -> Result<()> {
        self.out
            .queue(Print("Invalid format, please enter input again: "))?;
        self.out.flush()?;
        Ok(())
    }

    /// The scored result for one game, followed by a separator rule.
    pub fn total(&mut self, score: u32) -> Result<()> {
        self.out.queue(Print(format!("Total score: {score}\n")))?;
        self.out.queue(Print(SEPARATOR))?;
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Generic error line for any rejected roll; the session discards the
    /// game afterwards.
    pub fn illegal_operation(&mut self) -> Result<()> {
        self.out.queue(SetForegroundColor(Color::Red))?;
        self.out
            .queue(Print("Error: You attempted to perform an illegal operation...\n"))?;
        self.out.queue(ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    /// Farewell on quit/exit (or end of input).
    pub fn goodbye(&mut self) -> Result<()> {
        self.out
            .queue(Print("The quit/exit command has been invoked. Exiting application...\n"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the console and return its writer (used by tests to inspect
    /// captured output).
    pub fn into_inner(self) -> W {
        self.out
    }
}
