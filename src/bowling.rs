//! A bowling scorer. Every frame is two rolls. A frame whose two rolls add up
//! to ten is a spare and is worth its ten pins plus the first roll of the next
//! frame, which is only counted once that next frame is complete.
//!
//! # Examples
//!
//! ```
//! use bst::bowling::Game;
//!
//! # fn main() -> Result<(), bst::BowlingError> {
//! let mut game = Game::new();
//! game.bowl(5)?.bowl(5)?.bowl(3)?.bowl(4)?;
//!
//! // 10 + 3 for the spare, then 7.
//! assert_eq!(game.score(), 20);
//!
//! // Negative rolls are refused.
//! assert!(game.bowl(-1).is_err());
//! assert_eq!(game.score(), 20);
//! # Ok(())
//! # }
//! ```

use std::convert::TryFrom;

use crate::BowlingError;

/// The pins needed in one frame for a spare.
const ALL_PINS: u32 = 10;

/// A finished frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    first: u32,
    second: u32,
}

impl Frame {
    /// Pins knocked down by the first roll.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Pins knocked down by the second roll.
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Pins knocked down by both rolls.
    pub fn pins(&self) -> u32 {
        self.first.saturating_add(self.second)
    }

    /// Whether both rolls together knocked down all ten pins.
    pub fn is_spare(&self) -> bool {
        self.pins() == ALL_PINS
    }
}

/// A game in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    frames: Vec<Frame>,
    /// The first roll of a frame still waiting for its second roll.
    pending: Option<u32>,
    score: u32,
}

impl Game {
    /// A game with no rolls yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a roll. Returns the game so rolls can be chained with `?`.
    ///
    /// # Errors
    ///
    /// [`BowlingError::NegativePins`] if `pins` is below zero.
    pub fn bowl(&mut self, pins: i32) -> Result<&mut Self, BowlingError> {
        let pins = u32::try_from(pins).map_err(|_| BowlingError::NegativePins(pins))?;

        match self.pending.take() {
            None => self.pending = Some(pins),
            Some(first) => self.finish_frame(Frame {
                first,
                second: pins,
            }),
        }

        Ok(self)
    }

    /// Points from finished frames. A spare in the latest finished frame adds
    /// nothing until the frame after it is finished too.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The finished frames, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    fn finish_frame(&mut self, frame: Frame) {
        if !frame.is_spare() {
            self.score = self.score.saturating_add(frame.pins());
        }
        if let Some(previous) = self.frames.last().filter(|f| f.is_spare()) {
            let bonus = previous.pins().saturating_add(frame.first);
            self.score = self.score.saturating_add(bonus);
        }

        log::trace!(
            "frame {} finished with {} pins, score {}",
            self.frames.len() + 1,
            frame.pins(),
            self.score
        );
        self.frames.push(frame);
    }
}
