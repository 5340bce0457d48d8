use crate::chess::{Board, Color, Move};

mod heuristic;
mod random;

pub use heuristic::*;
pub use random::*;

/// Trait for types that pick the next [`Move`] of an automated side.
#[cfg_attr(test, mockall::automock)]
pub trait Select {
    /// Selects a legal [`Move`] for `side`, or `None` if it has none.
    fn select(&mut self, board: &Board, side: Color) -> Option<Move>;
}
