use crate::chess::{Color, Role};
use derive_more::Constructor;
use std::fmt::{self, Display, Formatter};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
}

impl Piece {
    pub const WHITE_PAWN: Self = Piece::of(Role::Pawn, Color::White);
    pub const WHITE_KING: Self = Piece::of(Role::King, Color::White);
    pub const BLACK_PAWN: Self = Piece::of(Role::Pawn, Color::Black);
    pub const BLACK_KING: Self = Piece::of(Role::King, Color::Black);
    pub const BLACK_QUEEN: Self = Piece::of(Role::Queen, Color::Black);

    const fn of(role: Role, color: Color) -> Self {
        Piece { role, color }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// White pieces print in uppercase, black pieces in lowercase.
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => write!(f, "{}", self.role.to_string().to_uppercase()),
            Color::Black => write!(f, "{}", self.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_color(r: Role, c: Color) {
        assert_eq!(Piece::new(r, c).color(), c);
    }

    #[proptest]
    fn piece_has_a_role(r: Role, c: Color) {
        assert_eq!(Piece::new(r, c).role(), r);
    }

    #[proptest]
    fn white_pieces_print_in_uppercase(r: Role) {
        assert_eq!(
            Piece::new(r, Color::White).to_string(),
            r.to_string().to_uppercase()
        );
    }

    #[proptest]
    fn black_pieces_print_in_lowercase(r: Role) {
        assert_eq!(Piece::new(r, Color::Black).to_string(), r.to_string());
    }
}
