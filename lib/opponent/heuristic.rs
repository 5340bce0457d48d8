use crate::chess::{Board, Color, Move, Role, Rules, Ruleset};
use crate::opponent::{Random, Select};
use tracing::{debug, instrument};

/// A greedy one-ply opponent.
///
/// Every legal move of the side to play is scored on its own merits:
/// capturing the opposing king trumps everything, capturing material comes
/// next, then approaching the opposing king. Uniform noise breaks ties.
#[derive(Debug, Default)]
pub struct Heuristic {
    rules: Rules,
    random: Random,
}

impl Heuristic {
    /// Capturing the opposing king wins the game.
    pub const KING_CAPTURE: f64 = 5000.;
    /// Capturing any other opposing piece.
    pub const MATERIAL_CAPTURE: f64 = 50.;
    /// Moving closer to the opposing king.
    pub const APPROACH: f64 = 10.;
    /// Capturing a piece of one's own side, where the [`Ruleset`] allows it.
    pub const FRIENDLY_FIRE: f64 = -500.;
    /// Moving a sliding piece, where the [`Ruleset`] allows friendly fire.
    pub const SLIDING_BONUS: f64 = 5.;
    /// The upper bound of the noise added to every score.
    pub const NOISE: f64 = 10.;

    /// Constructs [`Heuristic`] that follows [`Rules`] and draws noise from [`Random`].
    pub fn new(rules: Rules, random: Random) -> Self {
        Heuristic { rules, random }
    }

    /// The noiseless score of a legal [`Move`] for the side moving.
    pub fn score(&self, board: &Board, m: Move) -> f64 {
        let Some(piece) = board[m.whence()] else {
            return f64::NEG_INFINITY;
        };

        let side = piece.color();
        let mut score = match board[m.whither()] {
            Some(target) if target.color() == side => Self::FRIENDLY_FIRE,
            Some(target) if target.role() == Role::King => Self::KING_CAPTURE,
            Some(_) => Self::MATERIAL_CAPTURE,
            None => match board.king(!side) {
                Some(king) if m.whither().manhattan(king) < m.whence().manhattan(king) => {
                    Self::APPROACH
                }
                _ => 0.,
            },
        };

        if self.rules.ruleset() == Ruleset::Lenient && piece.role().is_sliding() {
            score += Self::SLIDING_BONUS;
        }

        score
    }
}

impl Select for Heuristic {
    #[instrument(level = "debug", skip(self, board), ret)]
    fn select(&mut self, board: &Board, side: Color) -> Option<Move> {
        let mut best: Option<(f64, Move)> = None;

        for m in self.rules.moves(board, side) {
            let score = self.score(board, m) + self.random.sample(0.0..Self::NOISE);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, m));
            }
        }

        if let Some((score, m)) = best {
            debug!(%m, score, "selected move");
        }

        best.map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Difficulty, Piece, Square};
    use proptest::sample::select;
    use rand::rngs::mock::StepRng;
    use test_strategy::proptest;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn noiseless(ruleset: Ruleset) -> Heuristic {
        Heuristic::new(Rules::new(ruleset), Random::new(StepRng::new(0, 0)))
    }

    #[proptest]
    fn selected_move_is_legal_and_belongs_to_the_side(
        r: Rules,
        b: Board,
        c: Color,
        seed: u64,
    ) {
        let mut h = Heuristic::new(r, Random::seeded(seed));
        if let Some(m) = h.select(&b, c) {
            assert!(r.is_legal(&b, m));
            assert_eq!(b[m.whence()].map(|p| p.color()), Some(c));
        }
    }

    #[proptest]
    fn selects_nothing_only_if_there_are_no_legal_moves(r: Rules, b: Board, c: Color, seed: u64) {
        let mut h = Heuristic::new(r, Random::seeded(seed));
        assert_eq!(h.select(&b, c).is_none(), r.moves(&b, c).next().is_none());
    }

    #[proptest]
    fn noiseless_selection_maximizes_the_score(r: Rules, b: Board, c: Color) {
        let mut h = Heuristic::new(r, Random::new(StepRng::new(0, 0)));
        if let Some(m) = h.select(&b, c) {
            let best = r.moves(&b, c).map(|n| h.score(&b, n)).fold(f64::MIN, f64::max);
            assert_eq!(h.score(&b, m), best);
        }
    }

    #[proptest]
    fn capturing_the_king_is_always_selected(
        r: Rules,
        mut b: Board,
        c: Color,
        king: Square,
        #[strategy(select(Vec::from_iter(#king.neighbors())))] whence: Square,
        seed: u64,
    ) {
        for sq in Square::iter() {
            if b[sq] == Some(Piece::new(Role::King, !c)) {
                b[sq] = None;
            }
        }

        b[king] = Some(Piece::new(Role::King, !c));
        b[whence] = Some(Piece::new(Role::Pawn, c));

        let mut h = Heuristic::new(r, Random::seeded(seed));
        let m = h.select(&b, c).unwrap();
        assert_eq!(b[m.whither()], Some(Piece::new(Role::King, !c)));
    }

    #[proptest]
    fn capturing_the_king_outscores_any_other_move_despite_noise(
        ruleset: Ruleset,
        mut b: Board,
        c: Color,
        p: Role,
        q: Role,
        #[filter(#m.whence() != #m.whither())] m: Move,
        #[filter(#n.whither() != #m.whither() && #n.whence() != #m.whither())] n: Move,
    ) {
        for sq in Square::iter() {
            if b[sq].is_some_and(|x| x.role() == Role::King) {
                b[sq] = None;
            }
        }

        b[m.whither()] = Some(Piece::new(Role::King, !c));
        b[m.whence()] = Some(Piece::new(p, c));
        b[n.whence()] = Some(Piece::new(q, c));

        let h = noiseless(ruleset);
        assert!(h.score(&b, m) > h.score(&b, n) + Heuristic::NOISE);
    }

    #[test]
    fn capturing_a_pawn_scores_fifty() {
        let mut b = Board::default();
        b[sq(3, 3)] = Some(Piece::BLACK_PAWN);
        b[sq(4, 4)] = Some(Piece::WHITE_PAWN);
        b[sq(7, 0)] = Some(Piece::WHITE_KING);

        let h = noiseless(Ruleset::Strict);
        assert_eq!(h.score(&b, Move::new(sq(3, 3), sq(4, 4))), 50.);
    }

    #[test]
    fn approaching_the_opposing_king_scores_ten() {
        let mut b = Board::default();
        b[sq(1, 0)] = Some(Piece::BLACK_PAWN);
        b[sq(7, 7)] = Some(Piece::WHITE_KING);

        let h = noiseless(Ruleset::Strict);
        assert_eq!(h.score(&b, Move::new(sq(1, 0), sq(2, 1))), 10.);
        assert_eq!(h.score(&b, Move::new(sq(1, 0), sq(2, 0))), 10.);
        assert_eq!(h.score(&b, Move::new(sq(1, 0), sq(0, 0))), 0.);
        assert_eq!(h.score(&b, Move::new(sq(1, 0), sq(0, 1))), 0.);
    }

    #[test]
    fn without_an_opposing_king_quiet_moves_score_nothing() {
        let mut b = Board::default();
        b[sq(1, 0)] = Some(Piece::BLACK_PAWN);

        let h = noiseless(Ruleset::Strict);
        assert_eq!(h.score(&b, Move::new(sq(1, 0), sq(2, 1))), 0.);
    }

    #[test]
    fn friendly_fire_is_discouraged_under_lenient_rules() {
        let mut b = Board::default();
        b[sq(1, 0)] = Some(Piece::BLACK_PAWN);
        b[sq(1, 1)] = Some(Piece::BLACK_PAWN);
        b[sq(7, 7)] = Some(Piece::WHITE_KING);

        let mut h = noiseless(Ruleset::Lenient);
        assert_eq!(h.score(&b, Move::new(sq(1, 0), sq(1, 1))), -500.);

        let m = h.select(&b, Color::Black).unwrap();
        assert_ne!(b[m.whither()], Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn sliding_pieces_get_a_bonus_under_lenient_rules() {
        let mut b = Board::default();
        b[sq(0, 0)] = Some(Piece::BLACK_QUEEN);

        let strict = noiseless(Ruleset::Strict);
        let lenient = noiseless(Ruleset::Lenient);
        let m = Move::new(sq(0, 0), sq(5, 5));

        assert_eq!(strict.score(&b, m), 0.);
        assert_eq!(lenient.score(&b, m), 5.);
    }

    #[proptest]
    fn lone_pawn_steps_into_one_of_its_neighbors(seed: u64) {
        let mut b = Board::default();
        b[sq(1, 0)] = Some(Piece::BLACK_PAWN);
        b[sq(7, 7)] = Some(Piece::WHITE_KING);

        let r = Rules::default();
        let mut h = Heuristic::new(r, Random::seeded(seed));
        let m = h.select(&b, Color::Black).unwrap();

        assert_eq!(m.whence(), sq(1, 0));
        assert!(sq(1, 0).neighbors().any(|n| n == m.whither()));
        assert!(r.is_legal(&b, m));
    }

    #[proptest]
    fn queen_takes_the_king_across_the_board(seed: u64) {
        let mut b = Board::new(Difficulty::Stupid);
        for col in 0..8 {
            b[sq(1, col)] = None;
            b[sq(6, col)] = None;
        }

        b[sq(7, 4)] = None;
        b[sq(7, 3)] = Some(Piece::WHITE_KING);
        b[sq(4, 4)] = Some(Piece::WHITE_PAWN);

        let mut h = Heuristic::new(Rules::default(), Random::seeded(seed));
        assert_eq!(h.select(&b, Color::Black), Some(Move::new(sq(0, 3), sq(7, 3))));
    }
}
