/// Board, pieces, and movement rules.
pub mod chess;
/// The turn cycle between the human and the computer.
pub mod game;
/// Automated move selection.
pub mod opponent;
