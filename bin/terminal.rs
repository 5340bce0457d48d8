use derive_more::{Display, Error};
use lib::chess::{Board, Difficulty};
use lib::game::{Presenter, Selection};
use std::{collections::VecDeque, str::FromStr};

/// A [`Presenter`] that renders the game as plain text.
///
/// Rendered messages are queued until drained by the caller.
#[derive(Debug, Default)]
pub struct Terminal {
    outbox: VecDeque<String>,
}

impl Terminal {
    /// Takes every message rendered so far.
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.outbox.drain(..)
    }
}

impl Presenter for Terminal {
    fn board_changed(&mut self, board: &Board) {
        self.outbox.push_back(board.to_string());
    }

    fn selection_changed(&mut self, selection: Option<Selection>) {
        let msg = match selection {
            None => "selection cleared".to_string(),
            Some(s) if s.destinations().is_empty() => {
                format!("selected {}, which has nowhere to go", s.square())
            }
            Some(s) => {
                let destinations: Vec<_> = s.destinations().iter().map(|d| d.to_string()).collect();
                format!("selected {}, may move to {}", s.square(), destinations.join(" "))
            }
        };

        self.outbox.push_back(msg);
    }

    fn game_over(&mut self, message: &str, human_won: bool) {
        let verdict = if human_won { "you won" } else { "you did not win" };
        self.outbox.push_back(format!("{message} ({verdict}, type `reset` to play again)"));
    }
}

/// An instruction typed by the human.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Click(i8, i8),
    Reset,
    Difficulty(Difficulty),
    Help,
    Quit,
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unrecognized command `{}`, type `help` for a list of commands", _0)]
pub struct ParseCommandError(#[error(not(source))] String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match &*s.to_ascii_lowercase() {
            "reset" => return Ok(Command::Reset),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        if let Ok(d) = s.parse() {
            return Ok(Command::Difficulty(d));
        }

        let mut coordinates = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());

        match (coordinates.next(), coordinates.next(), coordinates.next()) {
            (Some(row), Some(col), None) => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok(Command::Click(row, col)),
                _ => Err(ParseCommandError(s.into())),
            },
            _ => Err(ParseCommandError(s.into())),
        }
    }
}

impl Command {
    /// A short description of every command.
    pub const HELP: &'static str = "\
        <row>,<col>   click on the cell at the given row and column\n\
        easy|hard|stupid   start over at the given difficulty\n\
        reset   start over\n\
        help   print this message\n\
        quit   leave the game";
}
