use crate::chess::{Color, Difficulty, OutOfBounds, Piece, Role, Square};
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};
use tracing::instrument;

/// The 8x8 grid of cells, each either empty or holding a [`Piece`].
///
/// This type does not validate whether the placement it holds is reachable
/// under any set of rules, see [`Rules`][`crate::chess::Rules`] for that.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        proptest::collection::vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut board = Board::default();

                board
                    .cells
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(cell, p)| *cell = p);

                board
            })
            .boxed()
    }
}

impl Board {
    /// Constructs the initial [`Board`] for a [`Difficulty`].
    pub fn new(difficulty: Difficulty) -> Self {
        let mut board = Board::default();
        board.initialize(difficulty);
        board
    }

    /// The occupant of the cell at `(row, col)`.
    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Result<Option<Piece>, OutOfBounds> {
        Ok(self[Square::new(row, col)?])
    }

    /// Overwrites the occupant of the cell at `(row, col)`.
    ///
    /// No legality is checked here.
    #[inline(always)]
    pub fn set(&mut self, row: i8, col: i8, occupant: Option<Piece>) -> Result<(), OutOfBounds> {
        self[Square::new(row, col)?] = occupant;
        Ok(())
    }

    /// Clears the board and lays out both armies for a [`Difficulty`].
    #[instrument(level = "trace", skip(self))]
    pub fn initialize(&mut self, difficulty: Difficulty) {
        *self = Board::default();

        self.cells[0][4] = Some(Piece::BLACK_KING);
        self.cells[1] = [Some(Piece::BLACK_PAWN); 8];

        match difficulty {
            Difficulty::Easy => {}
            Difficulty::Hard => self.cells[2] = [Some(Piece::BLACK_PAWN); 8],
            Difficulty::Stupid => self.cells[0][3] = Some(Piece::BLACK_QUEEN),
        }

        self.cells[6] = [Some(Piece::WHITE_PAWN); 8];
        self.cells[7][4] = Some(Piece::WHITE_KING);
    }

    /// An iterator over all pieces on the board, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| self[sq].map(|p| (p, sq)))
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.iter().filter(move |(p, _)| p.color() == c)
    }

    /// [`Square`] occupied by the king of a [`Color`], if it is still on the board.
    pub fn king(&self, c: Color) -> Option<Square> {
        let king = Piece::new(Role::King, c);
        self.iter().find(|&(p, _)| p == king).map(|(_, sq)| sq)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.row() as usize][sq.col() as usize]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }
}

/// Prints the grid with row 0 on top, `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("  ")?;
        for col in 0..Square::SIDE {
            write!(f, " {col}")?;
        }

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "\n{row} ")?;
            for cell in cells {
                f.write_char(' ')?;
                match cell {
                    Some(p) => write!(f, "{p}")?,
                    None => f.write_char('.')?,
                }
            }
        }

        Ok(())
    }
}
