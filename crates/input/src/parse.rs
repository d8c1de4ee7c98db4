//! Line parsing: symbol alphabet validation and quit commands.

use thiserror::Error;

use crate::types::RollEvent;

/// A line contained a character outside the input alphabet.
///
/// The whole line is rejected; nothing before or after the offending
/// symbol is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid symbol '{symbol}' at position {position}")]
pub struct ParseLineError {
    pub symbol: char,
    pub position: usize,
}

/// Map one input symbol to a roll event, if it is in the alphabet.
pub fn parse_symbol(c: char) -> Option<RollEvent> {
    RollEvent::from_symbol(c)
}

/// Parse a whole line of roll symbols, left to right.
///
/// Any character outside the alphabet (`X`, `/`, `-`, `1`-`9`) invalidates
/// the entire line. An empty line parses to an empty event sequence.
pub fn parse_line(line: &str) -> Result<Vec<RollEvent>, ParseLineError> {
    line.chars()
        .enumerate()
        .map(|(position, symbol)| {
            parse_symbol(symbol).ok_or(ParseLineError { symbol, position })
        })
        .collect()
}

/// Check if a trimmed input line is a quit command.
///
/// Matches the whole line, case-sensitively: `"quit"` or `"exit"`.
pub fn should_quit(line: &str) -> bool {
    line == "quit" || line == "exit"
}
