use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Playing pieces shared by both games.
///
/// The set is closed: these nine variants are all there is. `Black` and
/// `White` double as scoring markers in the deduction game; whether they are
/// also eligible code colors is a per-game mode, see
/// [`JottoConfig::is_code_peg`](crate::JottoConfig::is_code_peg).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    Empty,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Brown,
    Black,
    White,
}

impl Peg {
    /// Every catalog variant, in declaration order.
    pub const ALL: [Peg; 9] = [
        Self::Empty,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Brown,
        Self::Black,
        Self::White,
    ];

    /// Display color as a CSS/X11-compatible color string.
    pub const fn color(self) -> &'static str {
        use Peg::*;
        match self {
            Empty => "#d3d3d3",  // X11 LightGray
            Red => "red",
            Green => "green",
            Blue => "blue",
            Yellow => "#ffff00", // X11 Yellow
            Orange => "#ff8c00", // X11 DarkOrange
            Brown => "#8b4513",  // SaddleBrown
            Black => "black",
            White => "white",
        }
    }

    /// Three-letter acronym used for compact rendering and input parsing.
    pub const fn short_name(self) -> &'static str {
        use Peg::*;
        match self {
            Empty => "000",
            Red => "RED",
            Green => "GRN",
            Blue => "BLU",
            Yellow => "YLW",
            Orange => "ORN",
            Brown => "BRN",
            Black => "BLK",
            White => "WHT",
        }
    }

    /// Full variant name, lowercase.
    pub const fn name(self) -> &'static str {
        use Peg::*;
        match self {
            Empty => "empty",
            Red => "red",
            Green => "green",
            Blue => "blue",
            Yellow => "yellow",
            Orange => "orange",
            Brown => "brown",
            Black => "black",
            White => "white",
        }
    }
}

impl Default for Peg {
    fn default() -> Self {
        Self::Empty
    }
}

impl core::str::FromStr for Peg {
    type Err = GameError;

    /// Accepts the acronym or the full variant name, case-insensitively.
    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|peg| {
                input.eq_ignore_ascii_case(peg.short_name())
                    || input.eq_ignore_ascii_case(peg.name())
            })
            .ok_or(GameError::UnknownPeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_acronyms_and_names_case_insensitively() {
        assert_eq!("BLU".parse(), Ok(Peg::Blue));
        assert_eq!("blu".parse(), Ok(Peg::Blue));
        assert_eq!("Yellow".parse(), Ok(Peg::Yellow));
        assert_eq!(" 000 ".parse(), Ok(Peg::Empty));
        assert_eq!("mauve".parse::<Peg>(), Err(GameError::UnknownPeg));
    }

    #[test]
    fn display_attributes_are_fixed() {
        assert_eq!(Peg::Orange.color(), "#ff8c00");
        assert_eq!(Peg::Brown.short_name(), "BRN");
        assert_eq!(Peg::ALL.len(), 9);
    }
}
