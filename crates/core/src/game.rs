//! Game state machine - frame advancement and on-demand total scoring.

use arrayvec::ArrayVec;

use crate::error::RollError;
use crate::frame::Frame;
use crate::types::{RollEvent, FRAME_COUNT, PIN_COUNT};

/// One game of ten-pin bowling.
///
/// Frames are appended lazily: the game starts with a single regular frame
/// and grows a new one whenever a roll arrives after the current frame has
/// completed, up to the final frame at index 9. Completed frames are
/// retained for the lifetime of the game so that spare and strike frames
/// can draw their bonus from the rolls that follow them.
///
/// All mutators are atomic: they either fully apply the roll or fail and
/// leave every observable (rolls, frame count, total) unchanged.
///
/// # Examples
///
/// ```
/// use tenpin_core::Game;
///
/// let mut game = Game::new();
/// game.strike().unwrap();
/// game.roll(5).unwrap();
/// game.roll(4).unwrap();
///
/// // 10 + 5 + 4 for the strike frame, 5 + 4 for the open frame.
/// assert_eq!(game.total_score(), 28);
/// assert_eq!(game.frame_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    frames: ArrayVec<Frame, FRAME_COUNT>,
    current: usize,
}

impl Game {
    /// Start a fresh game with its first frame ready for rolls.
    pub fn new() -> Self {
        let mut frames = ArrayVec::new();
        frames.push(Frame::regular());
        Self { frames, current: 0 }
    }

    /// Housekeeping before a roll lands: if the current frame has completed
    /// and a next frame exists, append it and advance. The frame at index
    /// `FRAME_COUNT - 1` is the final frame; once it completes there is
    /// nowhere left to advance and mutators fail on it.
    fn advance_if_complete(&mut self) {
        let frame = &self.frames[self.current];
        if frame.is_complete() && !frame.is_final() {
            self.current += 1;
            if self.current < FRAME_COUNT - 1 {
                self.frames.push(Frame::regular());
            } else {
                self.frames.push(Frame::final_frame());
            }
        }
    }

    /// Route one validated roll event to the matching mutator.
    pub fn apply(&mut self, event: RollEvent) -> Result<(), RollError> {
        match event {
            RollEvent::Pins(pins) => self.roll(pins),
            RollEvent::Miss => self.miss(),
            RollEvent::Spare => self.spare(),
            RollEvent::Strike => self.strike(),
        }
    }

    /// Record a numeric roll in the current frame.
    pub fn roll(&mut self, pins: u8) -> Result<(), RollError> {
        // Checked before advancing so an invalid count cannot grow the game.
        if pins > PIN_COUNT {
            return Err(RollError::InvalidPinCount { pins });
        }
        self.advance_if_complete();
        self.frames[self.current].record_roll(pins)
    }

    /// Record a miss (no pins knocked down).
    pub fn miss(&mut self) -> Result<(), RollError> {
        self.roll(0)
    }

    /// Record a spare in the current frame.
    pub fn spare(&mut self) -> Result<(), RollError> {
        // A completed current frame would hand the spare an empty successor,
        // which can never satisfy the one-prior-roll precondition. Reject
        // here, before advancing, so the frame count stays untouched.
        let frame = &self.frames[self.current];
        if frame.is_complete() {
            if frame.is_final() {
                return Err(RollError::FrameAlreadyComplete);
            }
            return Err(RollError::InvalidSpareState);
        }
        self.frames[self.current].record_spare()
    }

    /// Record a strike in the current frame.
    pub fn strike(&mut self) -> Result<(), RollError> {
        self.advance_if_complete();
        self.frames[self.current].record_strike()
    }

    /// Number of frames created so far (1 to 10).
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True once play has reached the tenth frame.
    pub fn at_final_frame(&self) -> bool {
        self.frames[self.current].is_final()
    }

    /// True once the final frame has completed; every further mutation will
    /// fail with [`RollError::FrameAlreadyComplete`].
    pub fn is_over(&self) -> bool {
        let frame = &self.frames[self.current];
        frame.is_final() && frame.is_complete()
    }

    /// Total score over everything rolled so far.
    ///
    /// A pure walk over the recorded frames: each frame's own pin counts,
    /// plus spare bonus from the next frame and strike bonus from the next
    /// two. Bonus rolls that have not happened yet contribute 0, so the
    /// total is well defined mid-game and idempotent between rolls.
    pub fn total_score(&self) -> u32 {
        let mut total = 0;
        for (i, frame) in self.frames.iter().enumerate() {
            total += frame.points().iter().map(|&p| u32::from(p)).sum::<u32>();
            total += frame.spare_bonus(self.frames.get(i + 1));
            total += frame.strike_bonus(&self.frames[i + 1..(i + 3).min(self.frames.len())]);
        }
        total
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
