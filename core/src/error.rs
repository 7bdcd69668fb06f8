use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Code has wrong number of pegs")]
    InvalidCodeLength,
    #[error("Guess has wrong number of pegs")]
    InvalidGuessLength,
    #[error("No secret code has been set")]
    CodeNotSet,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Unknown peg name")]
    UnknownPeg,
}

pub type Result<T> = core::result::Result<T, GameError>;
