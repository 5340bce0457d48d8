use crate::chess::{Board, Color, Move, Piece, Square};
use arrayvec::ArrayVec;
use derive_more::{Constructor, Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether pieces may move onto cells held by their own side.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Friendly fire is illegal for both sides.
    #[default]
    #[display(fmt = "strict")]
    Strict,
    /// Friendly fire is legal for both sides.
    #[display(fmt = "lenient")]
    Lenient,
}

/// Represents an illegal [`Move`] on a given [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "move `{_0}` is illegal on this board")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The movement rules.
///
/// Queens slide any distance along a clear row, column or diagonal,
/// every other piece steps into one of the adjacent cells.
/// There is no notion of check, a king may step into or stay under attack.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Rules {
    ruleset: Ruleset,
}

impl Rules {
    /// This rule's [`Ruleset`].
    #[inline(always)]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Whether a [`Move`] is legal on a [`Board`].
    pub fn is_legal(&self, board: &Board, m: Move) -> bool {
        let Some(piece) = board[m.whence()] else {
            return false;
        };

        if m.whence() == m.whither() {
            return false;
        }

        if self.ruleset == Ruleset::Strict
            && board[m.whither()].is_some_and(|p| p.color() == piece.color())
        {
            return false;
        }

        if piece.role().is_sliding() {
            let (drow, dcol) = m.displacement();
            (drow == 0 || dcol == 0 || drow == dcol) && Self::is_path_clear(board, m)
        } else {
            m.whence().chebyshev(m.whither()) == 1
        }
    }

    /// Whether every cell strictly between the origin and destination is empty.
    ///
    /// Only meaningful for moves along a row, column or diagonal.
    fn is_path_clear(board: &Board, m: Move) -> bool {
        let (whence, whither) = (m.whence(), m.whither());
        let drow = (whither.row() - whence.row()).signum();
        let dcol = (whither.col() - whence.col()).signum();

        let mut next = whence.offset(drow, dcol);
        while let Some(sq) = next.filter(|&sq| sq != whither) {
            if board[sq].is_some() {
                return false;
            }

            next = sq.offset(drow, dcol);
        }

        true
    }

    /// The candidate destinations of a piece, before checking legality.
    ///
    /// Sliding pieces may reach any cell, others only the adjacent ones.
    fn candidates(piece: Piece, whence: Square) -> ArrayVec<Square, 64> {
        if piece.role().is_sliding() {
            Square::iter().collect()
        } else {
            whence.neighbors().collect()
        }
    }

    /// Every [`Square`] the piece on `whence` may legally move to.
    #[instrument(level = "trace", skip(self, board), ret)]
    pub fn destinations(&self, board: &Board, whence: Square) -> ArrayVec<Square, 64> {
        match board[whence] {
            None => ArrayVec::new(),
            Some(p) => Self::candidates(p, whence)
                .into_iter()
                .filter(|&whither| self.is_legal(board, Move::new(whence, whither)))
                .collect(),
        }
    }

    /// An iterator over the legal moves of a side.
    pub fn moves<'a>(&'a self, board: &'a Board, side: Color) -> impl Iterator<Item = Move> + 'a {
        board.by_color(side).flat_map(move |(p, whence)| {
            Self::candidates(p, whence)
                .into_iter()
                .map(move |whither| Move::new(whence, whither))
                .filter(move |&m| self.is_legal(board, m))
        })
    }

    /// Plays a [`Move`] if legal, returning the captured occupant of the destination.
    #[instrument(level = "trace", skip(self, board), ret, err)]
    pub fn play(&self, board: &mut Board, m: Move) -> Result<Option<Piece>, IllegalMove> {
        if !self.is_legal(board, m) {
            return Err(IllegalMove(m));
        }

        let piece = board[m.whence()].take();
        Ok(std::mem::replace(&mut board[m.whither()], piece))
    }
}
