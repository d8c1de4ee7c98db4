//! Error types raised by frame and game mutators.
//!
//! Every variant is a local validation failure: deterministic given the
//! current state, never retried, and surfaced verbatim by [`crate::Game`].

use thiserror::Error;

/// Rejection reasons for a roll, spare, or strike application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// A roll claimed more pins than exist on the lane.
    #[error("a roll can knock down at most 10 pins, got {pins}")]
    InvalidPinCount { pins: u8 },

    /// Two rolls in one frame claimed more than a full rack combined.
    #[error("only 10 pins can be knocked down in a single frame ({first} then {second})")]
    PinCountExceeded { first: u8, second: u8 },

    /// A mutation arrived after the frame reached its terminal state. When
    /// the final frame raises this, the whole game is over.
    #[error("a completed frame cannot take additional rolls")]
    FrameAlreadyComplete,

    /// A spare was declared without exactly one prior roll in the frame.
    #[error("a spare needs exactly one prior roll in the frame")]
    InvalidSpareState,

    /// A strike was declared mid-frame, on a partially cleared rack.
    #[error("a strike needs a fresh rack of pins")]
    InvalidStrikeState,
}
