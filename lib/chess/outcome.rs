use crate::chess::Color;
use std::fmt::{self, Display, Formatter};

/// One of the possible outcomes of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    /// The king of a color was captured by a piece of some color.
    ///
    /// Both colors may coincide when friendly fire is allowed.
    KingCaptured { king: Color, by: Color },

    /// The side to move has no legal move left.
    Stalemate(Color),
}

impl Outcome {
    /// The winning side, or `None` if the game is drawn.
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::KingCaptured { king, .. } => Some(!king),
            Outcome::Stalemate(_) => None,
        }
    }
}

/// The message announcing the outcome, worded for a human playing White.
impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::KingCaptured {
                king: Color::Black,
                by: Color::White,
            } => f.write_str("White wins! The king is dead."),

            Outcome::KingCaptured {
                king: Color::White,
                by: Color::Black,
            } => f.write_str("Black wins! Your king is dead."),

            Outcome::KingCaptured {
                king: Color::White,
                by: Color::White,
            } => f.write_str("Black wins! You killed your own king."),

            Outcome::KingCaptured {
                king: Color::Black,
                by: Color::Black,
            } => f.write_str("White wins! Black killed its own king."),

            Outcome::Stalemate(c) => write!(f, "Stalemate! {c} has no legal moves."),
        }
    }
}
