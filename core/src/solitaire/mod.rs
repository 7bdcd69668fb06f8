use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

pub use board::*;

mod board;

pub const BOARD_ROWS: Coord = 7;
pub const BOARD_COLS: Coord = 7;

// Currently, the English cross is the only supported board layout: the 16
// corner cells are off, the center starts empty, everything else holds a peg.
#[rustfmt::skip]
const ENGLISH_OFF: [Coord2; 16] = [
    (0, 0), (0, 1), (0, 5), (0, 6),
    (1, 0), (1, 1), (1, 5), (1, 6),
    (5, 0), (5, 1), (5, 5), (5, 6),
    (6, 0), (6, 1), (6, 5), (6, 6),
];

const ENGLISH_EMPTY: [Coord2; 1] = [(3, 3)];

/// Classification of one board cell.
///
/// `Off` marks the corner cells outside the cross-shaped playable area and is
/// immutable for the life of the board; `Empty` and `Peg` toggle as jumps are
/// applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Off,
    Empty,
    Peg,
}

impl BoardCell {
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Empty | Self::Peg)
    }
}

/// Outcome of a selection attempt.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Cleared,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a jump attempt. `Removed` carries the jumped-over coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum JumpOutcome {
    NoChange,
    Removed(Coord2),
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn removed(self) -> Option<Coord2> {
        match self {
            Self::NoChange => None,
            Self::Removed(coords) => Some(coords),
        }
    }
}
