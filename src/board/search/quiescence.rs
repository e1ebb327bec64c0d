use super::{SearchContext, MAX_QSEARCH_DEPTH};
use crate::board::Board;

impl SearchContext<'_> {
    /// Stand-pat quiescence: at the horizon, keep searching only the noisy
    /// moves (captures, promotions, checks) until the position settles or
    /// the extension cap is reached, so the leaf score never lands in the
    /// middle of an exchange.
    pub(super) fn quiescence(
        &mut self,
        board: &Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        qdepth: u32,
    ) -> Option<i32> {
        if self.clock.expired() {
            return None;
        }
        self.nodes += 1;

        if board.is_game_over() {
            return Some(Self::terminal_score(board, 0));
        }
        let stand_pat = self.eval(board);
        if qdepth >= MAX_QSEARCH_DEPTH {
            return Some(stand_pat);
        }

        if maximizing {
            if stand_pat >= beta {
                return Some(beta);
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return Some(alpha);
            }
            beta = beta.min(stand_pat);
        }

        let side = board.side_to_move();
        let mut noisy: Vec<_> = board
            .generate_moves()
            .into_iter()
            .filter(|&mv| {
                if Self::is_capture(board, mv) {
                    return true;
                }
                let mut child = board.clone();
                child.make_move(mv);
                child.is_in_check(side.opponent())
            })
            .collect();
        if self.params.order_moves {
            self.order_moves(board, &mut noisy);
        }

        for mv in noisy {
            let mut child = board.clone();
            child.make_move(mv);
            let score = self.quiescence(&child, alpha, beta, !maximizing, qdepth + 1)?;
            if maximizing {
                alpha = alpha.max(score);
                if alpha >= beta {
                    return Some(beta);
                }
            } else {
                beta = beta.min(score);
                if beta <= alpha {
                    return Some(alpha);
                }
            }
        }

        Some(if maximizing { alpha } else { beta })
    }
}
