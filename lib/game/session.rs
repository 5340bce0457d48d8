use crate::chess::{Board, Color, Difficulty, IllegalMove, Move, OutOfBounds, Outcome, Role};
use crate::chess::{Rules, Square};
use crate::game::{Config, Presenter, Selection};
use crate::opponent::{Heuristic, Select};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// The phase of the turn cycle.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    #[display(fmt = "awaiting selection")]
    AwaitingSelection,
    #[display(fmt = "awaiting destination")]
    AwaitingDestination,
    #[display(fmt = "computing opponent move")]
    ComputingOpponentMove,
    #[display(fmt = "game over")]
    GameOver,
}

/// Whose turn it is, and whether the game is still going.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TurnState {
    pub active: Color,
    /// Once false, stays false until the [`Session`] is reset.
    pub game_active: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState {
            active: Color::White,
            game_active: true,
        }
    }
}

/// A game between a human playing White and an automated opponent playing Black.
#[derive(Debug)]
pub struct Session<P, S = Heuristic> {
    difficulty: Difficulty,
    rules: Rules,
    board: Board,
    turn: TurnState,
    phase: Phase,
    selection: Option<Selection>,
    outcome: Option<Outcome>,
    opponent: S,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    /// Starts a [`Session`] against the [`Heuristic`] opponent described by a [`Config`].
    pub fn with_config(config: &Config, presenter: P) -> Self {
        Session::new(config.difficulty, config.rules(), config.opponent(), presenter)
    }
}

impl<P: Presenter, S: Select> Session<P, S> {
    /// The side played by the human.
    pub const HUMAN: Color = Color::White;

    /// Starts a [`Session`], laying out the board for a [`Difficulty`].
    pub fn new(difficulty: Difficulty, rules: Rules, opponent: S, presenter: P) -> Self {
        let mut session = Session {
            difficulty,
            rules,
            board: Board::default(),
            turn: TurnState::default(),
            phase: Phase::AwaitingSelection,
            selection: None,
            outcome: None,
            opponent,
            presenter,
        };

        session.reset();
        session
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Difficulty`] of the current game.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The movement [`Rules`].
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The current [`Phase`] of the turn cycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current [`TurnState`].
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The human's current [`Selection`], if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The [`Outcome`] of the game, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The [`Presenter`] this session reports to, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Whether the human may act.
    pub fn is_player_turn(&self) -> bool {
        self.turn.game_active && self.turn.active == Self::HUMAN
    }

    /// Stores a new [`Difficulty`] and starts over.
    #[instrument(level = "debug", skip(self))]
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Starts over with the initial board of the current [`Difficulty`].
    #[instrument(level = "debug", skip(self), fields(difficulty = %self.difficulty))]
    pub fn reset(&mut self) {
        self.load(Board::new(self.difficulty));
    }

    /// Starts over from an arbitrary placement, with the human to move.
    #[instrument(level = "debug", skip(self, board), fields(%board))]
    pub fn load(&mut self, board: Board) {
        self.board = board;
        self.turn = TurnState::default();
        self.phase = Phase::AwaitingSelection;
        self.selection = None;
        self.outcome = None;
        self.presenter.board_changed(&self.board);
    }

    /// Handles the human clicking on the cell at `(row, col)`.
    ///
    /// Clicks are ignored unless it is the human's turn.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn on_cell_clicked(&mut self, row: i8, col: i8) -> Result<Phase, OutOfBounds> {
        let clicked = Square::new(row, col)?;

        if !self.is_player_turn() {
            debug!(phase = %self.phase, "ignoring click");
            return Ok(self.phase);
        }

        let previous = self.selection.take();
        if let Some(selected) = &previous {
            if let Ok(outcome) = self.apply(Move::new(selected.square(), clicked)) {
                self.presenter.selection_changed(None);

                match outcome {
                    Some(outcome) => self.finish(outcome),
                    None => {
                        self.turn.active = !Self::HUMAN;
                        self.phase = Phase::ComputingOpponentMove;
                    }
                }

                return Ok(self.phase);
            }
        }

        if self.board[clicked].is_some_and(|p| p.color() == Self::HUMAN) {
            let destinations = self.rules.destinations(&self.board, clicked);
            let selection = Selection::new(clicked, destinations);
            self.selection = Some(selection.clone());
            self.phase = Phase::AwaitingDestination;
            self.presenter.selection_changed(Some(selection));
        } else {
            self.phase = Phase::AwaitingSelection;
            if previous.is_some() {
                self.presenter.selection_changed(None);
            }
        }

        Ok(self.phase)
    }

    /// Lets the opponent play exactly one move, if it is its turn.
    ///
    /// An opponent without legal moves ends the game in a stalemate.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn play_opponent(&mut self) -> Result<Phase, IllegalMove> {
        if self.phase != Phase::ComputingOpponentMove {
            debug!(phase = %self.phase, "not the opponent's turn");
            return Ok(self.phase);
        }

        let side = self.turn.active;
        let Some(m) = self.opponent.select(&self.board, side) else {
            self.finish(Outcome::Stalemate(side));
            return Ok(self.phase);
        };

        if self.board[m.whence()].map(|p| p.color()) != Some(side) {
            return Err(IllegalMove(m));
        }

        match self.apply(m)? {
            Some(outcome) => self.finish(outcome),
            None => {
                self.turn.active = !side;
                self.phase = Phase::AwaitingSelection;
            }
        }

        Ok(self.phase)
    }

    /// Plays a legal [`Move`], returning the [`Outcome`] if it captured a king.
    fn apply(&mut self, m: Move) -> Result<Option<Outcome>, IllegalMove> {
        let mover = self.board[m.whence()].ok_or(IllegalMove(m))?;
        let captured = self.rules.play(&mut self.board, m)?;
        debug!(%m, ?captured, "played move");
        self.presenter.board_changed(&self.board);

        Ok(captured
            .filter(|p| p.role() == Role::King)
            .map(|king| Outcome::KingCaptured {
                king: king.color(),
                by: mover.color(),
            }))
    }

    fn finish(&mut self, outcome: Outcome) {
        let human_won = outcome.winner() == Some(Self::HUMAN);
        info!(%outcome, human_won, "game over");

        self.turn.game_active = false;
        self.phase = Phase::GameOver;
        self.selection = None;
        self.outcome = Some(outcome);
        self.presenter.game_over(&outcome.to_string(), human_won);
    }
}
