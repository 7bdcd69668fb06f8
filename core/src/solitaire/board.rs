use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{ENGLISH_EMPTY, ENGLISH_OFF};
use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolitaireBoard {
    grid: Array2<BoardCell>,
    initial_pegs: CellCount,
    current_pegs: CellCount,
    turns_taken: CellCount,
    selected: Option<Coord2>,
}

impl SolitaireBoard {
    pub fn new() -> Self {
        let mut grid = Array2::from_elem((BOARD_ROWS, BOARD_COLS).to_nd_index(), BoardCell::Peg);
        for coords in ENGLISH_EMPTY {
            grid[coords.to_nd_index()] = BoardCell::Empty;
        }
        for coords in ENGLISH_OFF {
            grid[coords.to_nd_index()] = BoardCell::Off;
        }

        let initial_pegs = count_pegs(&grid);
        Self {
            grid,
            initial_pegs,
            current_pegs: initial_pegs,
            turns_taken: 0,
            selected: None,
        }
    }

    pub fn size(&self) -> Coord2 {
        (BOARD_ROWS, BOARD_COLS)
    }

    pub fn cell_at(&self, coords: Coord2) -> BoardCell {
        self.grid[coords.to_nd_index()]
    }

    pub fn selected_peg(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn peg_count(&self) -> CellCount {
        self.current_pegs
    }

    pub fn initial_peg_count(&self) -> CellCount {
        self.initial_pegs
    }

    pub fn turns_taken(&self) -> CellCount {
        self.turns_taken
    }

    pub fn status(&self) -> BoardStatus {
        BoardStatus {
            turns_taken: self.turns_taken,
            current_pegs: self.current_pegs,
            initial_pegs: self.initial_pegs,
        }
    }

    /// Marks the peg at `coords` as the origin of the next jump. Re-selecting
    /// the selected peg clears the selection; selecting another peg replaces
    /// it. Cells not holding a peg leave the selection untouched.
    pub fn select_peg(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let coords = self.validate_coords(coords)?;

        if self.cell_at(coords) != BoardCell::Peg {
            return Ok(NoChange);
        }

        Ok(if self.selected == Some(coords) {
            self.selected = None;
            Cleared
        } else {
            self.selected = Some(coords);
            Selected
        })
    }

    /// Legality query for jumping the currently selected peg to `landing`.
    /// Returns the coordinate of the peg that would be removed, or `None`
    /// when no peg is selected or the move is illegal.
    pub fn is_legal_jump(&self, landing: Coord2) -> Option<Coord2> {
        self.legal_jump_between(self.selected?, landing)
    }

    /// Selection-independent legality query: a jump from `origin` to
    /// `landing` is legal when the origin holds a peg, the landing cell is
    /// empty, the two are exactly two cells apart along one grid axis, and
    /// the cell strictly between them holds the peg to be captured.
    ///
    /// Callers that need stalemate detection probe this over all peg/landing
    /// pairs; the board itself models no terminal state.
    pub fn legal_jump_between(&self, origin: Coord2, landing: Coord2) -> Option<Coord2> {
        if self.validate_coords(origin).is_err() || self.validate_coords(landing).is_err() {
            return None;
        }
        if self.cell_at(origin) != BoardCell::Peg || self.cell_at(landing) != BoardCell::Empty {
            return None;
        }

        let ((row_a, col_a), (row_b, col_b)) = (origin, landing);
        let between = if row_a == row_b && col_a.abs_diff(col_b) == 2 {
            (row_a, col_a.midpoint(col_b))
        } else if col_a == col_b && row_a.abs_diff(row_b) == 2 {
            (row_a.midpoint(row_b), col_a)
        } else {
            return None;
        };

        (self.cell_at(between) == BoardCell::Peg).then_some(between)
    }

    /// Jumps the selected peg to `landing` if legal: origin and jumped-over
    /// cells become empty, the landing cell gains the peg, and the selection
    /// is cleared. Illegal attempts (including no selection) mutate nothing.
    pub fn jump_and_remove(&mut self, landing: Coord2) -> Result<JumpOutcome> {
        let landing = self.validate_coords(landing)?;

        let Some(origin) = self.selected else {
            return Ok(JumpOutcome::NoChange);
        };
        let Some(removed) = self.legal_jump_between(origin, landing) else {
            return Ok(JumpOutcome::NoChange);
        };

        self.grid[origin.to_nd_index()] = BoardCell::Empty;
        self.grid[removed.to_nd_index()] = BoardCell::Empty;
        self.grid[landing.to_nd_index()] = BoardCell::Peg;
        self.current_pegs = count_pegs(&self.grid);
        self.turns_taken += 1;
        self.selected = None;

        Ok(JumpOutcome::Removed(removed))
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < BOARD_ROWS && coords.1 < BOARD_COLS {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Default for SolitaireBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn count_pegs(grid: &Array2<BoardCell>) -> CellCount {
    grid.iter()
        .filter(|&&cell| cell == BoardCell::Peg)
        .count()
        .try_into()
        .unwrap()
}

/// Read-only display summary, recomputed on demand.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardStatus {
    pub turns_taken: CellCount,
    pub current_pegs: CellCount,
    pub initial_pegs: CellCount,
}

impl core::fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Moves={} Pegs={}/{}",
            self.turns_taken, self.current_pegs, self.initial_pegs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn fresh_board_has_english_cross_layout() {
        let board = SolitaireBoard::new();

        let mut off = 0;
        let mut empty = 0;
        let mut pegs = 0;
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                match board.cell_at((row, col)) {
                    BoardCell::Off => off += 1,
                    BoardCell::Empty => empty += 1,
                    BoardCell::Peg => pegs += 1,
                }
            }
        }

        assert_eq!((off, empty, pegs), (16, 1, 32));
        assert_eq!(board.cell_at((3, 3)), BoardCell::Empty);
        assert_eq!(board.peg_count(), 32);
        assert_eq!(board.initial_peg_count(), 32);
        assert_eq!(board.turns_taken(), 0);
        assert_eq!(board.selected_peg(), None);
    }

    #[test]
    fn selection_toggles_and_replaces() {
        let mut board = SolitaireBoard::new();

        assert_eq!(board.select_peg((1, 3)).unwrap(), SelectOutcome::Selected);
        assert_eq!(board.selected_peg(), Some((1, 3)));

        // A second peg silently replaces the first.
        assert_eq!(board.select_peg((2, 3)).unwrap(), SelectOutcome::Selected);
        assert_eq!(board.selected_peg(), Some((2, 3)));

        // Re-selecting the selected peg clears it.
        assert_eq!(board.select_peg((2, 3)).unwrap(), SelectOutcome::Cleared);
        assert_eq!(board.selected_peg(), None);
    }

    #[test]
    fn selecting_non_peg_cells_is_ignored() {
        let mut board = SolitaireBoard::new();

        assert_eq!(board.select_peg((3, 3)).unwrap(), SelectOutcome::NoChange);
        assert_eq!(board.select_peg((0, 0)).unwrap(), SelectOutcome::NoChange);
        assert_eq!(board.selected_peg(), None);

        assert_eq!(board.select_peg((7, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn legal_jump_moves_peg_and_removes_captured_one() {
        let mut board = SolitaireBoard::new();
        board.select_peg((1, 3)).unwrap();

        let outcome = board.jump_and_remove((3, 3)).unwrap();

        assert_eq!(outcome, JumpOutcome::Removed((2, 3)));
        assert_eq!(board.cell_at((1, 3)), BoardCell::Empty);
        assert_eq!(board.cell_at((2, 3)), BoardCell::Empty);
        assert_eq!(board.cell_at((3, 3)), BoardCell::Peg);
        assert_eq!(board.peg_count(), 31);
        assert_eq!(board.turns_taken(), 1);
        assert_eq!(board.selected_peg(), None);
    }

    #[test]
    fn jump_without_selection_is_rejected() {
        let mut board = SolitaireBoard::new();

        assert_eq!(board.is_legal_jump((3, 3)), None);
        assert_eq!(board.jump_and_remove((3, 3)).unwrap(), JumpOutcome::NoChange);
        assert_eq!(board.peg_count(), 32);
        assert_eq!(board.turns_taken(), 0);
    }

    #[test]
    fn illegal_jump_shapes_leave_board_untouched() {
        let mut board = SolitaireBoard::new();
        let pristine = board.clone();

        // Diagonal, distance one down, occupied landing, distance one up.
        board.select_peg((1, 2)).unwrap();
        for landing in [(3, 4), (2, 2), (1, 4), (0, 2)] {
            assert_eq!(board.is_legal_jump(landing), None, "landing {landing:?}");
            assert_eq!(
                board.jump_and_remove(landing).unwrap(),
                JumpOutcome::NoChange,
                "landing {landing:?}"
            );
        }
        assert_eq!(board.jump_and_remove((7, 7)), Err(GameError::InvalidCoords));

        board.select_peg((1, 2)).unwrap(); // toggle the selection back off
        assert_eq!(board, pristine);
    }

    #[test]
    fn jump_over_empty_middle_is_rejected() {
        let mut board = SolitaireBoard::new();
        board.select_peg((1, 3)).unwrap();
        board.jump_and_remove((3, 3)).unwrap();

        // (1, 3) is now empty, so (0, 3) has nothing to hop into (2, 3).
        board.select_peg((0, 3)).unwrap();
        assert_eq!(board.is_legal_jump((2, 3)), None);
        assert_eq!(board.jump_and_remove((2, 3)).unwrap(), JumpOutcome::NoChange);
    }

    #[test]
    fn off_cells_never_change() {
        let mut board = SolitaireBoard::new();

        // A jump can never land on or pass through an off cell; probe the
        // nearest candidates around the (0..2, 0..2) corner.
        board.select_peg((2, 1)).unwrap();
        assert_eq!(board.is_legal_jump((0, 1)), None);
        assert_eq!(board.jump_and_remove((0, 1)).unwrap(), JumpOutcome::NoChange);
        assert_eq!(board.cell_at((0, 1)), BoardCell::Off);
        assert_eq!(board.cell_at((1, 1)), BoardCell::Off);
    }

    #[test]
    fn chained_jumps_keep_counts_consistent() {
        let mut board = SolitaireBoard::new();

        board.select_peg((1, 3)).unwrap();
        assert!(board.jump_and_remove((3, 3)).unwrap().has_update());
        board.select_peg((2, 1)).unwrap();
        assert!(board.jump_and_remove((2, 3)).unwrap().has_update());

        assert_eq!(board.peg_count(), 30);
        assert_eq!(board.turns_taken(), 2);
        assert_eq!(board.status().to_string(), "Moves=2 Pegs=30/32");
    }

    #[test]
    fn board_state_survives_serde_round_trip() {
        let mut board = SolitaireBoard::new();
        board.select_peg((1, 3)).unwrap();
        board.jump_and_remove((3, 3)).unwrap();
        board.select_peg((4, 3)).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: SolitaireBoard = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.selected_peg(), Some((4, 3)));
    }
}
