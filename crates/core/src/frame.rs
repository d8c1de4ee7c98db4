//! Frame scoring - regular frames and the tenth-frame variant.
//!
//! A [`Frame`] is a tagged variant over the two frame shapes: the 2-roll
//! [`RegularFrame`] (frames 1-9) and the 3-roll [`FinalFrame`] (frame 10).
//! Status is always derived from the recorded rolls, never stored, so a
//! rejected mutation cannot leave a half-updated frame behind.
//!
//! Bonus scoring is backward-looking: a spare or strike frame asks the
//! frame(s) that follow it for the roll values it needs. Rolls that have not
//! happened yet simply contribute nothing, which is what makes mid-game
//! totals well defined.

use arrayvec::ArrayVec;

use crate::error::RollError;
use crate::types::{FrameStatus, FINAL_FRAME_ROLLS, FRAME_ROLLS, PIN_COUNT};

/// One of frames 1-9: up to two rolls, at most 10 pins between them.
#[derive(Debug, Clone, Default)]
pub struct RegularFrame {
    rolls: ArrayVec<u8, FRAME_ROLLS>,
}

impl RegularFrame {
    fn status(&self) -> FrameStatus {
        match self.rolls.as_slice() {
            &[first] if first == PIN_COUNT => FrameStatus::Strike,
            &[first, second] if first + second == PIN_COUNT => FrameStatus::Spare,
            &[_, _] => FrameStatus::Open,
            _ => FrameStatus::Incomplete,
        }
    }

    fn is_complete(&self) -> bool {
        self.status() != FrameStatus::Incomplete
    }

    fn record_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::FrameAlreadyComplete);
        }
        if pins > PIN_COUNT {
            return Err(RollError::InvalidPinCount { pins });
        }
        // Validate the pair sum before appending so a rejected roll leaves
        // the frame untouched.
        if let &[first] = self.rolls.as_slice() {
            if first + pins > PIN_COUNT {
                return Err(RollError::PinCountExceeded {
                    first,
                    second: pins,
                });
            }
        }
        self.rolls.push(pins);
        Ok(())
    }

    fn record_spare(&mut self) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::FrameAlreadyComplete);
        }
        let &[first] = self.rolls.as_slice() else {
            return Err(RollError::InvalidSpareState);
        };
        // Whatever was left standing after the first roll.
        self.rolls.push(PIN_COUNT - first);
        Ok(())
    }

    fn record_strike(&mut self) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::FrameAlreadyComplete);
        }
        if !self.rolls.is_empty() {
            return Err(RollError::InvalidStrikeState);
        }
        self.rolls.push(PIN_COUNT);
        Ok(())
    }
}

/// The tenth frame: up to three flat rolls, bonus rolls gated by the
/// strike/spare status of the opening pair.
///
/// Completion rule:
///
/// - open or missed opening pair: complete after 2 rolls
/// - spare: one bonus roll, complete after 3
/// - strike then strike: third roll granted, complete after 3
/// - strike then a non-strike: complete after 2, no third roll
///
/// A final frame never grants bonus to a following frame, because there is
/// none; its bonus rolls are self-contained in its own point total.
#[derive(Debug, Clone, Default)]
pub struct FinalFrame {
    rolls: ArrayVec<u8, FINAL_FRAME_ROLLS>,
}

impl FinalFrame {
    fn is_complete(&self) -> bool {
        match self.rolls.as_slice() {
            &[first, second] => {
                if first == PIN_COUNT {
                    // Strike: only a second strike earns a third roll.
                    second < PIN_COUNT
                } else {
                    // Spare keeps going for its bonus roll; open is done.
                    first + second < PIN_COUNT
                }
            }
            &[_, _, _] => true,
            _ => false,
        }
    }

    /// True when the next roll starts against a freshly racked set of pins:
    /// the first roll, the roll after a strike, or the third-roll slot
    /// (only reachable after a spare or a double strike).
    fn next_roll_opens_rack(&self) -> bool {
        match self.rolls.as_slice() {
            &[first] => first == PIN_COUNT,
            _ => true,
        }
    }

    fn status(&self) -> FrameStatus {
        match self.rolls.as_slice() {
            &[first, ..] if first == PIN_COUNT => FrameStatus::Strike,
            &[first, second, ..] if first + second == PIN_COUNT => FrameStatus::Spare,
            &[_, _] | &[_, _, _] => FrameStatus::Open,
            _ => FrameStatus::Incomplete,
        }
    }

    fn record_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::FrameAlreadyComplete);
        }
        if pins > PIN_COUNT {
            return Err(RollError::InvalidPinCount { pins });
        }
        // The opening pair of a non-strike frame shares one rack; rolls that
        // open a fresh rack may claim any count.
        if let &[first] = self.rolls.as_slice() {
            if first < PIN_COUNT && first + pins > PIN_COUNT {
                return Err(RollError::PinCountExceeded {
                    first,
                    second: pins,
                });
            }
        }
        self.rolls.push(pins);
        Ok(())
    }

    fn record_spare(&mut self) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::FrameAlreadyComplete);
        }
        let &[first] = self.rolls.as_slice() else {
            return Err(RollError::InvalidSpareState);
        };
        if first == PIN_COUNT {
            // The roll after a strike opens a fresh rack; there is no prior
            // roll for a spare to complete.
            return Err(RollError::InvalidSpareState);
        }
        self.rolls.push(PIN_COUNT - first);
        Ok(())
    }

    fn record_strike(&mut self) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::FrameAlreadyComplete);
        }
        if !self.next_roll_opens_rack() {
            return Err(RollError::InvalidStrikeState);
        }
        self.rolls.push(PIN_COUNT);
        Ok(())
    }
}

/// One frame of the game, dispatching to whichever variant it holds.
#[derive(Debug, Clone)]
pub enum Frame {
    Regular(RegularFrame),
    Final(FinalFrame),
}

impl Frame {
    /// A fresh regular frame (frames 1-9).
    pub fn regular() -> Self {
        Frame::Regular(RegularFrame::default())
    }

    /// A fresh final frame (frame 10).
    pub fn final_frame() -> Self {
        Frame::Final(FinalFrame::default())
    }

    /// Record a numeric roll of `pins` (0 counts as a miss).
    pub fn record_roll(&mut self, pins: u8) -> Result<(), RollError> {
        match self {
            Frame::Regular(f) => f.record_roll(pins),
            Frame::Final(f) => f.record_roll(pins),
        }
    }

    /// Record a spare: the second roll clears whatever the first left.
    pub fn record_spare(&mut self) -> Result<(), RollError> {
        match self {
            Frame::Regular(f) => f.record_spare(),
            Frame::Final(f) => f.record_spare(),
        }
    }

    /// Record a strike: all ten pins on a fresh rack.
    pub fn record_strike(&mut self) -> Result<(), RollError> {
        match self {
            Frame::Regular(f) => f.record_strike(),
            Frame::Final(f) => f.record_strike(),
        }
    }

    /// Scoring status derived from the recorded rolls.
    pub fn status(&self) -> FrameStatus {
        match self {
            Frame::Regular(f) => f.status(),
            Frame::Final(f) => f.status(),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Frame::Regular(f) => f.is_complete(),
            Frame::Final(f) => f.is_complete(),
        }
    }

    pub fn is_spare(&self) -> bool {
        self.status() == FrameStatus::Spare
    }

    pub fn is_strike(&self) -> bool {
        self.status() == FrameStatus::Strike
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Frame::Final(_))
    }

    /// Raw pin counts recorded so far, in temporal order.
    pub fn points(&self) -> &[u8] {
        match self {
            Frame::Regular(f) => f.rolls.as_slice(),
            Frame::Final(f) => f.rolls.as_slice(),
        }
    }

    /// Bonus drawn from the following frame if this frame is a spare: the
    /// next frame's first roll, or 0 while it has not been rolled.
    ///
    /// A final frame never grants itself forward bonus.
    pub fn spare_bonus(&self, next: Option<&Frame>) -> u32 {
        if self.is_final() || !self.is_spare() {
            return 0;
        }
        next.and_then(|frame| frame.points().first())
            .map(|&pins| u32::from(pins))
            .unwrap_or(0)
    }

    /// Bonus drawn from the following frames if this frame is a strike: the
    /// first two rolls found scanning `next` in order. Rolls that have not
    /// happened yet contribute nothing.
    pub fn strike_bonus(&self, next: &[Frame]) -> u32 {
        if self.is_final() || !self.is_strike() {
            return 0;
        }
        next.iter()
            .flat_map(|frame| frame.points())
            .take(2)
            .map(|&pins| u32::from(pins))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled(pins: &[u8]) -> Frame {
        let mut frame = Frame::regular();
        for &p in pins {
            frame.record_roll(p).unwrap();
        }
        frame
    }

    #[test]
    fn regular_frame_status_derivation() {
        assert_eq!(Frame::regular().status(), FrameStatus::Incomplete);
        assert_eq!(rolled(&[4]).status(), FrameStatus::Incomplete);
        assert_eq!(rolled(&[4, 3]).status(), FrameStatus::Open);
        assert_eq!(rolled(&[4, 6]).status(), FrameStatus::Spare);
        assert_eq!(rolled(&[10]).status(), FrameStatus::Strike);
    }

    #[test]
    fn regular_frame_completes_after_two_rolls() {
        let mut frame = Frame::regular();
        frame.record_roll(3).unwrap();
        assert!(!frame.is_complete());
        frame.record_roll(5).unwrap();
        assert!(frame.is_complete());
        assert_eq!(
            frame.record_roll(1),
            Err(RollError::FrameAlreadyComplete)
        );
    }

    #[test]
    fn strike_completes_a_regular_frame_immediately() {
        let mut frame = Frame::regular();
        frame.record_strike().unwrap();
        assert!(frame.is_complete());
        assert!(frame.is_strike());
        assert_eq!(frame.points(), &[10]);
    }

    #[test]
    fn spare_fills_in_the_remaining_pins() {
        let mut frame = Frame::regular();
        frame.record_roll(2).unwrap();
        frame.record_spare().unwrap();
        assert!(frame.is_spare());
        assert_eq!(frame.points(), &[2, 8]);
    }

    #[test]
    fn spare_after_a_miss_claims_all_ten() {
        let mut frame = Frame::regular();
        frame.record_roll(0).unwrap();
        frame.record_spare().unwrap();
        assert_eq!(frame.points(), &[0, 10]);
        assert!(frame.is_spare());
    }

    #[test]
    fn spare_requires_exactly_one_roll() {
        let mut frame = Frame::regular();
        assert_eq!(frame.record_spare(), Err(RollError::InvalidSpareState));
        frame.record_roll(3).unwrap();
        frame.record_roll(4).unwrap();
        assert_eq!(frame.record_spare(), Err(RollError::FrameAlreadyComplete));
    }

    #[test]
    fn strike_requires_an_empty_frame() {
        let mut frame = Frame::regular();
        frame.record_roll(3).unwrap();
        assert_eq!(frame.record_strike(), Err(RollError::InvalidStrikeState));
    }

    #[test]
    fn two_numeric_rolls_summing_to_ten_derive_spare() {
        assert_eq!(rolled(&[5, 5]).status(), FrameStatus::Spare);
    }

    #[test]
    fn ten_on_the_first_numeric_roll_derives_strike() {
        assert_eq!(rolled(&[10]).status(), FrameStatus::Strike);
    }

    #[test]
    fn pin_count_exceeded_leaves_frame_untouched() {
        let mut frame = Frame::regular();
        frame.record_roll(6).unwrap();
        assert_eq!(
            frame.record_roll(6),
            Err(RollError::PinCountExceeded { first: 6, second: 6 })
        );
        // The rejected roll was never appended.
        assert_eq!(frame.points(), &[6]);
        assert!(!frame.is_complete());
        frame.record_roll(4).unwrap();
        assert!(frame.is_spare());
    }

    #[test]
    fn pin_count_over_ten_is_rejected() {
        let mut frame = Frame::regular();
        assert_eq!(
            frame.record_roll(11),
            Err(RollError::InvalidPinCount { pins: 11 })
        );
        assert_eq!(frame.points(), &[] as &[u8]);
    }

    #[test]
    fn final_frame_open_pair_completes_at_two_rolls() {
        let mut frame = Frame::final_frame();
        frame.record_roll(3).unwrap();
        assert!(!frame.is_complete());
        frame.record_roll(4).unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.record_roll(1), Err(RollError::FrameAlreadyComplete));
    }

    #[test]
    fn final_frame_spare_earns_one_bonus_roll() {
        let mut frame = Frame::final_frame();
        frame.record_roll(7).unwrap();
        frame.record_spare().unwrap();
        assert!(!frame.is_complete());
        frame.record_roll(5).unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.points(), &[7, 3, 5]);
    }

    #[test]
    fn final_frame_spare_bonus_may_be_a_strike() {
        let mut frame = Frame::final_frame();
        frame.record_roll(2).unwrap();
        frame.record_spare().unwrap();
        frame.record_strike().unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.points(), &[2, 8, 10]);
    }

    #[test]
    fn final_frame_strike_then_non_strike_completes_at_two() {
        let mut frame = Frame::final_frame();
        frame.record_strike().unwrap();
        assert!(!frame.is_complete());
        frame.record_roll(7).unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.record_roll(2), Err(RollError::FrameAlreadyComplete));
        assert_eq!(frame.points(), &[10, 7]);
    }

    #[test]
    fn final_frame_double_strike_earns_a_third_roll() {
        let mut frame = Frame::final_frame();
        frame.record_strike().unwrap();
        frame.record_strike().unwrap();
        assert!(!frame.is_complete());
        frame.record_roll(4).unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.points(), &[10, 10, 4]);
    }

    #[test]
    fn final_frame_triple_strike() {
        let mut frame = Frame::final_frame();
        frame.record_strike().unwrap();
        frame.record_strike().unwrap();
        frame.record_strike().unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.points(), &[10, 10, 10]);
        assert_eq!(frame.record_strike(), Err(RollError::FrameAlreadyComplete));
    }

    #[test]
    fn final_frame_spare_needs_a_partial_first_roll() {
        let mut frame = Frame::final_frame();
        assert_eq!(frame.record_spare(), Err(RollError::InvalidSpareState));
        frame.record_strike().unwrap();
        // The roll after a strike opens a fresh rack.
        assert_eq!(frame.record_spare(), Err(RollError::InvalidSpareState));
    }

    #[test]
    fn final_frame_strike_needs_a_fresh_rack() {
        let mut frame = Frame::final_frame();
        frame.record_roll(4).unwrap();
        assert_eq!(frame.record_strike(), Err(RollError::InvalidStrikeState));
    }

    #[test]
    fn final_frame_opening_pair_enforces_pin_sum() {
        let mut frame = Frame::final_frame();
        frame.record_roll(8).unwrap();
        assert_eq!(
            frame.record_roll(5),
            Err(RollError::PinCountExceeded { first: 8, second: 5 })
        );
        assert_eq!(frame.points(), &[8]);
    }

    #[test]
    fn final_frame_grants_no_forward_bonus() {
        let mut frame = Frame::final_frame();
        frame.record_strike().unwrap();
        frame.record_strike().unwrap();
        frame.record_strike().unwrap();
        let next = Frame::regular();
        assert_eq!(frame.spare_bonus(Some(&next)), 0);
        assert_eq!(frame.strike_bonus(std::slice::from_ref(&next)), 0);
    }

    #[test]
    fn spare_bonus_reads_the_next_first_roll() {
        let mut frame = Frame::regular();
        frame.record_roll(2).unwrap();
        frame.record_spare().unwrap();
        assert_eq!(frame.spare_bonus(None), 0);
        assert_eq!(frame.spare_bonus(Some(&Frame::regular())), 0);
        assert_eq!(frame.spare_bonus(Some(&rolled(&[3]))), 3);
        assert_eq!(frame.spare_bonus(Some(&rolled(&[3, 4]))), 3);
    }

    #[test]
    fn strike_bonus_scans_two_rolls_across_frames() {
        let mut frame = Frame::regular();
        frame.record_strike().unwrap();
        assert_eq!(frame.strike_bonus(&[]), 0);
        assert_eq!(frame.strike_bonus(&[rolled(&[5])]), 5);
        assert_eq!(frame.strike_bonus(&[rolled(&[5, 4])]), 9);
        // Two strikes in a row: one roll from each of the next two frames.
        assert_eq!(frame.strike_bonus(&[rolled(&[10]), rolled(&[7])]), 17);
        // Never more than two rolls.
        assert_eq!(frame.strike_bonus(&[rolled(&[5, 4]), rolled(&[10])]), 9);
    }

    #[test]
    fn strike_bonus_reads_into_a_final_frame() {
        let mut ninth = Frame::regular();
        ninth.record_strike().unwrap();
        let mut tenth = Frame::final_frame();
        tenth.record_roll(0).unwrap();
        tenth.record_roll(2).unwrap();
        assert_eq!(ninth.strike_bonus(std::slice::from_ref(&tenth)), 2);
    }
}
