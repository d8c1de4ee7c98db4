//! Input parsing module (session-facing).
//!
//! This module is intentionally free of any I/O. It maps lines of input
//! text into sequences of [`crate::types::RollEvent`] and recognizes the
//! quit commands, leaving reading and prompting to the terminal layer.

pub mod parse;

pub use tenpin_types as types;

pub use parse::{parse_line, parse_symbol, should_quit, ParseLineError};
