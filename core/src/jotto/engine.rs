use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One scored guess, in submission order.
///
/// `score` is a multiset of `Black`/`White`/`Empty` markers: the algorithm
/// emits exact matches first, so marker positions carry no correspondence to
/// guess positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Vec<Peg>,
    pub score: Vec<Peg>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JottoEngine {
    config: JottoConfig,
    code: Vec<Peg>,
    guesses: Vec<GuessRecord>,
    state: JottoState,
}

impl JottoEngine {
    pub fn new(config: JottoConfig) -> Self {
        Self {
            config,
            code: Vec::new(),
            guesses: Vec::new(),
            state: Default::default(),
        }
    }

    pub fn config(&self) -> JottoConfig {
        self.config
    }

    pub fn state(&self) -> JottoState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn game_won(&self) -> bool {
        matches!(self.state, JottoState::Won)
    }

    /// The committed secret code; empty before [`set_code`](Self::set_code).
    pub fn code(&self) -> &[Peg] {
        &self.code
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn guesses_used(&self) -> u8 {
        self.guesses.len() as u8
    }

    pub fn guesses_left(&self) -> u8 {
        self.config.allowed_guesses.saturating_sub(self.guesses_used())
    }

    pub const fn is_code_peg(&self, peg: Peg) -> bool {
        self.config.is_code_peg(peg)
    }

    /// Commits an explicit secret code. Committing again before the game ends
    /// silently overwrites the previous secret.
    pub fn set_code(&mut self, code: &[Peg]) -> Result<()> {
        self.check_not_finished()?;

        if code.len() != usize::from(self.config.code_length) {
            return Err(GameError::InvalidCodeLength);
        }

        self.commit_code(code.to_vec());
        Ok(())
    }

    /// Commits a generated secret code, typically from
    /// [`RandomCodeGenerator`].
    pub fn set_code_with<G: CodeGenerator>(&mut self, generator: G) -> Result<()> {
        self.check_not_finished()?;

        let code = generator.generate(self.config);
        debug_assert_eq!(code.len(), usize::from(self.config.code_length));
        self.commit_code(code);
        Ok(())
    }

    fn commit_code(&mut self, code: Vec<Peg>) {
        self.code = code;
        if self.state.is_ready() {
            self.state = JottoState::Active;
        }
    }

    /// Two-pass exact-then-partial scoring. Pure query: no state is touched.
    ///
    /// The result always holds exactly `code_length` markers drawn from
    /// `Black`/`White`/`Empty`, in algorithm insertion order.
    pub fn score_guess(&self, guess: &[Peg]) -> Result<Vec<Peg>> {
        if self.code.is_empty() {
            return Err(GameError::CodeNotSet);
        }
        if guess.len() != self.code.len() {
            return Err(GameError::InvalidGuessLength);
        }

        let mut score = Vec::with_capacity(self.code.len());
        let mut misses = Vec::new();
        let mut remainders = Vec::new();

        // Exact matches (color AND position) first; anything else records the
        // guessed peg as a miss and the secret peg as a remainder.
        for (&guessed, &secret) in guess.iter().zip(&self.code) {
            if guessed == secret {
                score.push(Peg::Black);
            } else {
                misses.push(guessed);
                remainders.push(secret);
            }
        }

        // Each miss is either partial (color present elsewhere) or complete.
        // Every match consumes one remainder so colors pair up with
        // multiplicity.
        for miss in misses {
            match remainders.iter().position(|&left| left == miss) {
                Some(at) => {
                    remainders.swap_remove(at);
                    score.push(Peg::White);
                }
                None => score.push(Peg::Empty),
            }
        }

        Ok(score)
    }

    /// Scores `guess`, appends it to the history, and re-derives the game
    /// state: won on an all-`Black` score, lost once the guess allowance is
    /// used up without one.
    pub fn submit_guess(&mut self, guess: &[Peg]) -> Result<GuessOutcome> {
        self.check_not_finished()?;

        let score = self.score_guess(guess)?;
        let won = score.iter().all(|&marker| marker == Peg::Black);
        self.guesses.push(GuessRecord {
            guess: guess.to_vec(),
            score,
        });

        Ok(if won {
            self.state = JottoState::Won;
            GuessOutcome::Won
        } else if self.guesses.len() >= usize::from(self.config.allowed_guesses) {
            self.state = JottoState::Lost;
            GuessOutcome::Lost
        } else {
            GuessOutcome::Ongoing
        })
    }

    /// Returns all per-game fields to their initial values, keeping the
    /// construction parameters.
    pub fn reset(&mut self) {
        self.code.clear();
        self.guesses.clear();
        self.state = JottoState::Ready;
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
