use derive_more::{Display, Error};
use std::fmt;

/// A coordinate outside of the 8x8 board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "cell ({row}, {col}) is out of bounds")]
pub struct OutOfBounds {
    pub row: i8,
    pub col: i8,
}

/// A cell on the board, addressed by row and column.
///
/// Row 0 is Black's home row, row 7 is White's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    col: i8,
}

impl Square {
    /// The number of rows and columns on the board.
    pub const SIDE: i8 = 8;

    /// Constructs [`Square`] from a pair of row and column, each in `0..8`.
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Result<Self, OutOfBounds> {
        if (0..Self::SIDE).contains(&row) && (0..Self::SIDE).contains(&col) {
            Ok(Square { row, col })
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    /// An iterator over all squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::SIDE * Self::SIDE).map(|i| Square {
            row: i / Self::SIDE,
            col: i % Self::SIDE,
        })
    }

    /// The square displaced by the given offsets, if still on the board.
    #[inline(always)]
    pub fn offset(&self, drow: i8, dcol: i8) -> Option<Self> {
        Square::new(self.row + drow, self.col + dcol).ok()
    }

    /// An iterator over the adjacent squares, clipped to the board.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        (-1..=1)
            .flat_map(|drow| (-1..=1).map(move |dcol| (drow, dcol)))
            .filter(|&d| d != (0, 0))
            .filter_map(move |(drow, dcol)| self.offset(drow, dcol))
    }

    /// The number of king steps between two squares.
    #[inline(always)]
    pub fn chebyshev(&self, other: Square) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// The number of rook steps between two squares.
    #[inline(always)]
    pub fn manhattan(&self, other: Square) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_row_and_col(sq: Square) {
        assert_eq!(Square::new(sq.row(), sq.col()), Ok(sq));
    }

    #[proptest]
    fn new_fails_if_row_out_of_bounds(#[filter(!(0..8).contains(&#row))] row: i8, col: i8) {
        assert_eq!(Square::new(row, col), Err(OutOfBounds { row, col }));
    }

    #[proptest]
    fn new_fails_if_col_out_of_bounds(row: i8, #[filter(!(0..8).contains(&#col))] col: i8) {
        assert_eq!(Square::new(row, col), Err(OutOfBounds { row, col }));
    }

    #[test]
    fn iter_visits_every_square_once_in_row_major_order() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares.first(), Square::new(0, 0).ok().as_ref());
        assert_eq!(squares.last(), Square::new(7, 7).ok().as_ref());
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[proptest]
    fn neighbors_are_one_king_step_away(sq: Square) {
        for n in sq.neighbors() {
            assert!(sq.row().abs_diff(n.row()) <= 1);
            assert!(sq.col().abs_diff(n.col()) <= 1);
            assert_ne!(sq, n);
        }
    }

    #[proptest]
    fn every_square_one_king_step_away_is_a_neighbor(a: Square, b: Square) {
        assert_eq!(a.neighbors().any(|n| n == b), a.chebyshev(b) == 1);
    }

    #[test]
    fn corner_has_three_neighbors() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.neighbors().count(), 3);
    }

    #[proptest]
    fn distances_are_symmetric(a: Square, b: Square) {
        assert_eq!(a.chebyshev(b), b.chebyshev(a));
        assert_eq!(a.manhattan(b), b.manhattan(a));
        assert!(a.chebyshev(b) <= a.manhattan(b));
    }

    #[proptest]
    fn square_prints_as_row_comma_col(sq: Square) {
        assert_eq!(sq.to_string(), format!("{},{}", sq.row(), sq.col()));
    }
}
