use serde::{Deserialize, Serialize};

use crate::Peg;

pub use engine::*;
pub use generator::*;

mod engine;
mod generator;

/// Fixed per-game parameters for the deduction game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JottoConfig {
    pub code_length: u8,
    pub allowed_guesses: u8,
    /// When set, `Black` and `White` are ordinary code colors on top of their
    /// scoring-marker role. The resulting ambiguity is the caller's mode
    /// choice, not something the engine disambiguates.
    pub score_pegs_as_code: bool,
}

impl JottoConfig {
    pub const fn new_unchecked(
        code_length: u8,
        allowed_guesses: u8,
        score_pegs_as_code: bool,
    ) -> Self {
        Self {
            code_length,
            allowed_guesses,
            score_pegs_as_code,
        }
    }

    pub fn new(code_length: u8, allowed_guesses: u8, score_pegs_as_code: bool) -> Self {
        if code_length == 0 || allowed_guesses == 0 {
            log::warn!(
                "code length and allowed guesses must be positive, clamping {code_length}/{allowed_guesses}"
            );
        }
        Self::new_unchecked(
            code_length.clamp(1, u8::MAX),
            allowed_guesses.clamp(1, u8::MAX),
            score_pegs_as_code,
        )
    }

    /// Whether `peg` may appear in a secret code or a guess.
    pub const fn is_code_peg(self, peg: Peg) -> bool {
        self.score_pegs_as_code || !matches!(peg, Peg::Black | Peg::White)
    }
}

impl Default for JottoConfig {
    fn default() -> Self {
        Self::new_unchecked(4, 6, false)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JottoState {
    /// Constructed or reset; no secret code committed yet.
    Ready,
    Active,
    Won,
    Lost,
}

impl JottoState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for JottoState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of submitting one guess.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    Ongoing,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn is_finished(self) -> bool {
        match self {
            Self::Ongoing => false,
            Self::Won => true,
            Self::Lost => true,
        }
    }
}
