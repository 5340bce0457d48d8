use crate::chess::{Board, Square};
use arrayvec::ArrayVec;

/// The piece currently picked by the human, with the cells it may move to.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Selection {
    square: Square,
    destinations: ArrayVec<Square, 64>,
}

impl Selection {
    /// Constructs [`Selection`] of the piece on `square`.
    pub fn new(square: Square, destinations: ArrayVec<Square, 64>) -> Self {
        Selection {
            square,
            destinations,
        }
    }

    /// The selected [`Square`].
    pub fn square(&self) -> Square {
        self.square
    }

    /// The cells the selected piece may legally move to.
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }
}

/// Trait for types that render a game and collect the human's input.
///
/// The [`Session`][`crate::game::Session`] notifies it of every change.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// The board was mutated or reset.
    fn board_changed(&mut self, board: &Board);

    /// A piece was selected, or the selection was cleared.
    fn selection_changed(&mut self, selection: Option<Selection>);

    /// The game ended, fired once per game.
    fn game_over(&mut self, message: &str, human_won: bool);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn board_changed(&mut self, board: &Board) {
        (**self).board_changed(board)
    }

    fn selection_changed(&mut self, selection: Option<Selection>) {
        (**self).selection_changed(selection)
    }

    fn game_over(&mut self, message: &str, human_won: bool) {
        (**self).game_over(message, human_won)
    }
}
