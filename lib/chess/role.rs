use std::fmt::{self, Formatter, Write};

/// The kind of a [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Pawn,
    King,
    Queen,
}

impl Role {
    /// Whether this role slides along straight lines and diagonals.
    ///
    /// Every other role steps into one of the adjacent cells.
    #[inline(always)]
    pub fn is_sliding(&self) -> bool {
        matches!(self, Role::Queen)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pawn => f.write_char('p'),
            Role::King => f.write_char('k'),
            Role::Queen => f.write_char('q'),
        }
    }
}
