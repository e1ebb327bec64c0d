use super::SearchContext;
use crate::board::eval::piece_value;
use crate::board::{Board, Move};

const CAPTURE_BASE: i32 = 1000;
const QUIET_PAWN_PUSH: i32 = 200;
const GIVES_CHECK: i32 = 50;

impl SearchContext<'_> {
    /// Sort moves most-promising first: promotions, then captures by
    /// MVV-LVA, then quiet pawn pushes, then checking moves, then the
    /// rest. The sort is stable, so equal-scoring moves keep generation
    /// order and the tie-break stays deterministic.
    pub(super) fn order_moves(&mut self, board: &Board, moves: &mut Vec<Move>) {
        let mut scored: Vec<(i32, Move)> = moves
            .iter()
            .map(|&mv| (Self::ordering_score(board, mv), mv))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        moves.clear();
        moves.extend(scored.into_iter().map(|(_, mv)| mv));
    }

    fn ordering_score(board: &Board, mv: Move) -> i32 {
        if mv.promotion().is_some() {
            return i32::MAX;
        }
        if Self::is_capture(board, mv) {
            return CAPTURE_BASE + Self::mvv_lva(board, mv);
        }
        let mover = board.piece_at(mv.from());
        if mover.is_some_and(|p| p.is_pawn()) && mv.from().file() == mv.to().file() {
            return QUIET_PAWN_PUSH;
        }
        let side = board.side_to_move();
        let mut child = board.clone();
        child.make_move(mv);
        if child.is_in_check(side.opponent()) {
            return GIVES_CHECK;
        }
        0
    }

    /// Captures include en-passant (the target square is empty) and
    /// promotions, which the quiescence search also treats as noisy.
    pub(super) fn is_capture(board: &Board, mv: Move) -> bool {
        if board.piece_at(mv.to()).is_some() {
            return true;
        }
        let mover = board.piece_at(mv.from());
        if mover.is_some_and(|p| p.is_pawn())
            && mv.from().file() != mv.to().file()
            && board.en_passant_target() == Some(mv.to())
        {
            return true;
        }
        mv.promotion().is_some()
    }

    /// Most-valuable-victim, least-valuable-attacker: victim value minus
    /// mover value, so QxP sorts below PxQ
    fn mvv_lva(board: &Board, mv: Move) -> i32 {
        let victim = board.piece_at(mv.to()).map_or(0, |p| piece_value(p.kind));
        let mover = board.piece_at(mv.from()).map_or(0, |p| piece_value(p.kind));
        victim - mover
    }
}
