//! Scoring core - pure, deterministic, and allocation-free
//!
//! This crate holds the whole of the bowling rules: frame state, the tenth
//! frame's extended roll structure, frame advancement, and bonus scoring.
//! It has **zero dependencies** on I/O, making it:
//!
//! - **Deterministic**: the same roll sequence always scores the same
//! - **Testable**: every rule has unit coverage next to its code
//! - **Allocation-free**: rolls and frames live in fixed-capacity storage
//!
//! # Module Structure
//!
//! - [`frame`]: regular and final frame variants behind one dispatch surface
//! - [`game`]: frame sequencing and the on-demand total-score walk
//! - [`error`]: the validation failures mutators can raise
//!
//! # Scoring Rules
//!
//! Standard American ten-pin scoring:
//!
//! - ten frames; frames 1-9 take up to two rolls, frame 10 up to three
//! - a **spare** frame adds the next roll to its score
//! - a **strike** frame adds the next two rolls to its score
//! - the tenth frame's bonus rolls are self-contained; it neither grants
//!   nor receives cross-frame bonus
//!
//! Because a spare or strike frame scores from rolls that have not happened
//! yet when it is recorded, [`Game::total_score`] is a second pass over the
//! recorded history rather than a running accumulator; absent bonus rolls
//! simply count 0, which is what makes mid-game totals well defined.
//!
//! # Example
//!
//! ```
//! use tenpin_core::{Game, RollError};
//! use tenpin_types::RollEvent;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.apply(RollEvent::Strike)?;
//! }
//!
//! assert_eq!(game.total_score(), 300);
//! assert_eq!(game.frame_count(), 10);
//! assert!(game.is_over());
//! assert_eq!(game.apply(RollEvent::Strike), Err(RollError::FrameAlreadyComplete));
//! # Ok::<(), RollError>(())
//! ```

pub mod error;
pub mod frame;
pub mod game;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::RollError;
pub use frame::Frame;
pub use game::Game;
