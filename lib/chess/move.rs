use crate::chess::Square;
use derive_more::Display;

/// A single ply, from one [`Square`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}-{}", _0, _1)]
pub struct Move(Square, Square);

impl Move {
    /// Constructs [`Move`] from its origin and destination.
    #[inline(always)]
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither)
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The absolute row and column displacements.
    #[inline(always)]
    pub fn displacement(&self) -> (u8, u8) {
        (
            self.0.row().abs_diff(self.1.row()),
            self.0.col().abs_diff(self.1.col()),
        )
    }
}
