//! Shared types module - pure data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (scoring core, input parsing, terminal session, tests).
//!
//! # Game Constants
//!
//! Standard American ten-pin bowling:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins on a freshly racked lane |
//! | `FRAME_COUNT` | 10 | Frames per game |
//! | `FRAME_ROLLS` | 2 | Roll capacity of frames 1-9 |
//! | `FINAL_FRAME_ROLLS` | 3 | Roll capacity of the tenth frame |
//!
//! # Symbol Alphabet
//!
//! One character maps to exactly one roll event:
//!
//! - `X` — strike (capital only)
//! - `/` — spare
//! - `-` — miss
//! - `1`-`9` — pins knocked down in a partial roll
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{RollEvent, PIN_COUNT, FRAME_COUNT};
//!
//! assert_eq!(RollEvent::from_symbol('X'), Some(RollEvent::Strike));
//! assert_eq!(RollEvent::from_symbol('7'), Some(RollEvent::Pins(7)));
//! assert_eq!(RollEvent::from_symbol('x'), None);
//!
//! assert_eq!(RollEvent::Spare.symbol(), '/');
//!
//! assert_eq!(PIN_COUNT, 10);
//! assert_eq!(FRAME_COUNT, 10);
//! ```

/// Number of pins on a freshly racked lane.
pub const PIN_COUNT: u8 = 10;

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Roll capacity of a regular frame (frames 1-9).
pub const FRAME_ROLLS: usize = 2;

/// Roll capacity of the final frame (two rolls plus one bonus roll).
pub const FINAL_FRAME_ROLLS: usize = 3;

/// Scoring status of a frame, derived from its recorded rolls.
///
/// - **Incomplete**: fewer rolls than the frame needs, and no strike yet
/// - **Open**: two rolls knocking down fewer than 10 pins combined
/// - **Spare**: 10 pins across two rolls, first roll under 10
/// - **Strike**: 10 pins on the first roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameStatus {
    Incomplete,
    Open,
    Spare,
    Strike,
}

/// A single validated roll event fed to the scoring core.
///
/// This is the unit the input adapter produces: one symbol from the line
/// becomes exactly one `RollEvent`, which the game routes to exactly one
/// mutator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollEvent {
    /// A numeric roll knocking down 1-9 pins.
    Pins(u8),
    /// A roll knocking down no pins (`-`).
    Miss,
    /// A second roll clearing the remaining pins (`/`).
    Spare,
    /// A first roll clearing all 10 pins (`X`).
    Strike,
}

impl RollEvent {
    /// Parse a single input symbol (case-sensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::RollEvent;
    ///
    /// assert_eq!(RollEvent::from_symbol('X'), Some(RollEvent::Strike));
    /// assert_eq!(RollEvent::from_symbol('/'), Some(RollEvent::Spare));
    /// assert_eq!(RollEvent::from_symbol('-'), Some(RollEvent::Miss));
    /// assert_eq!(RollEvent::from_symbol('3'), Some(RollEvent::Pins(3)));
    /// assert_eq!(RollEvent::from_symbol('0'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(RollEvent::Strike),
            '/' => Some(RollEvent::Spare),
            '-' => Some(RollEvent::Miss),
            '1'..='9' => Some(RollEvent::Pins(c as u8 - b'0')),
            _ => None,
        }
    }

    /// The input symbol for this event.
    ///
    /// Only meaningful for events producible by [`RollEvent::from_symbol`];
    /// `Pins` values outside 1-9 have no symbol in the alphabet.
    pub fn symbol(&self) -> char {
        match *self {
            RollEvent::Strike => 'X',
            RollEvent::Spare => '/',
            RollEvent::Miss => '-',
            RollEvent::Pins(n) => (b'0' + n) as char,
        }
    }
}
