/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for peg counts, guess counts, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, origin in the upper-left corner.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
