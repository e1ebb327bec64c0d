use super::{SearchContext, SearchResult};
use crate::board::Board;

impl SearchContext<'_> {
    /// Fixed-depth alpha-beta min-max. White maximizes, Black minimizes,
    /// scores always from White's point of view. The returned result
    /// carries the principal variation from this node.
    ///
    /// `None` means the deadline expired; partial results below an expired
    /// node are meaningless and the whole depth is abandoned by the caller.
    pub(super) fn alphabeta(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<SearchResult> {
        if self.clock.expired() {
            return None;
        }
        self.nodes += 1;

        if board.is_game_over() {
            return Some(SearchResult::leaf(Self::terminal_score(board, depth)));
        }
        if depth == 0 {
            return if self.params.quiescence {
                self.quiescence(board, alpha, beta, maximizing, 0)
                    .map(SearchResult::leaf)
            } else {
                Some(SearchResult::leaf(self.eval(board)))
            };
        }

        let mut moves = board.generate_moves();
        if moves.is_empty() {
            return Some(SearchResult::leaf(Self::terminal_score(board, depth)));
        }
        if self.params.order_moves {
            self.order_moves(board, &mut moves);
        }

        let mut best: Option<SearchResult> = None;
        if maximizing {
            for mv in moves {
                let mut child = board.clone();
                child.make_move(mv);
                let reply = self.alphabeta(&child, depth - 1, false, alpha, beta)?;
                if best.as_ref().map_or(true, |held| reply.score > held.score) {
                    best = Some(SearchResult::through(mv, reply));
                }
                alpha = alpha.max(best.as_ref().map_or(i32::MIN, |b| b.score));
                if alpha >= beta {
                    break;
                }
            }
        } else {
            for mv in moves {
                let mut child = board.clone();
                child.make_move(mv);
                let reply = self.alphabeta(&child, depth - 1, true, alpha, beta)?;
                if best.as_ref().map_or(true, |held| reply.score < held.score) {
                    best = Some(SearchResult::through(mv, reply));
                }
                beta = beta.min(best.as_ref().map_or(i32::MAX, |b| b.score));
                if beta <= alpha {
                    break;
                }
            }
        }
        best
    }
}
