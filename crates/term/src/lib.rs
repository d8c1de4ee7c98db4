//! Terminal session module.
//!
//! A small, line-oriented console layer: a styled [`Console`] writer built
//! on queued crossterm commands, and the [`Session`] loop that reads game
//! lines, feeds them to the scoring core, and prints totals. The terminal
//! stays in cooked mode; this is a prompt/response program, not a
//! full-screen UI.
//!
//! Goals:
//! - Keep `core` pure; everything I/O-shaped lives here
//! - Keep the session generic over reader/writer so tests can script it

pub mod console;
pub mod session;

pub use tenpin_core as core;
pub use tenpin_input as input;
pub use tenpin_types as types;

pub use console::Console;
pub use session::Session;
