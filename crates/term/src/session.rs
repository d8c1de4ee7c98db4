//! Interactive session: the prompt/score/reset loop around one `Game`.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::console::Console;
use crate::core::{Game, RollError};
use crate::input::{parse_line, should_quit};
use crate::types::RollEvent;

/// One interactive run of the score calculator.
///
/// Owns the current [`Game`] by value; "reset" is constructing a fresh one
/// and dropping the old, never a mutation in place. Generic over its reader
/// and writer so tests can script it with in-memory buffers.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    console: Console<W>,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            console: Console::new(writer),
            game: Game::new(),
        }
    }

    /// Run the session until a quit command or end of input.
    ///
    /// Per iteration: prompt, read a line, reprompt while the line has
    /// characters outside the alphabet, apply its events left to right,
    /// then print either the total or the generic error line. Either way
    /// the next line starts a fresh game.
    pub fn run(&mut self) -> Result<()> {
        self.console.greeting()?;

        loop {
            self.console.prompt()?;
            let mut line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            let events = loop {
                if should_quit(&line) {
                    self.console.goodbye()?;
                    return Ok(());
                }
                match parse_line(&line) {
                    Ok(events) => break events,
                    Err(_) => {
                        self.console.reprompt()?;
                        line = match self.read_line()? {
                            Some(line) => line,
                            None => {
                                self.console.goodbye()?;
                                return Ok(());
                            }
                        };
                    }
                }
            };

            match self.score(&events) {
                Ok(total) => self.console.total(total)?,
                Err(_) => self.console.illegal_operation()?,
            }
            self.game = Game::new();
        }

        // End of input without an explicit quit; exit gracefully.
        self.console.goodbye()?;
        Ok(())
    }

    /// Apply one line's events to the current game and report its total.
    /// The first rejected roll aborts the line; the caller discards the
    /// game either way.
    fn score(&mut self, events: &[RollEvent]) -> std::result::Result<u32, RollError> {
        for &event in events {
            self.game.apply(event)?;
        }
        Ok(self.game.total_score())
    }

    /// Read one trimmed line; `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Consume the session and return the captured writer (for tests).
    pub fn into_output(self) -> W {
        self.console.into_inner()
    }
}
