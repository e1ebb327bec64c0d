use super::SearchContext;
use crate::board::{Board, Color};

impl SearchContext<'_> {
    /// Verification scan for a root move that gives check: follow the
    /// check sequence for up to `rem_checks` of our checking moves,
    /// letting the defender pick their best escape at each step, and
    /// score the position where the checks run out.
    ///
    /// This catches root moves whose static score looks strong only
    /// because the horizon cuts a check sequence short of its refutation.
    /// "Best" and "worst" are judged from `us`'s side, so the scan works
    /// identically for either color.
    ///
    /// Terminals are graded by `rem_checks`, so a mate found with more
    /// budget left (fewer checks played) outscores one found deeper.
    pub(super) fn forced_check_scan(&mut self, board: &Board, us: Color, rem_checks: u32) -> i32 {
        self.nodes += 1;
        let them = us.opponent();
        let favor = |score: i32| us.sign() * score;

        if board.is_game_over() {
            return Self::terminal_score(board, rem_checks);
        }
        if rem_checks == 0 || !board.is_in_check(them) {
            return self.eval(board);
        }

        let escapes = board.generate_moves_for(them);
        if escapes.is_empty() {
            return Self::terminal_score(board, rem_checks);
        }

        // The defender picks the escape that is worst for us
        let mut worst: Option<i32> = None;
        for escape in escapes {
            let mut defended = board.clone();
            defended.make_move(escape);

            let outcome = if defended.is_game_over() {
                Self::terminal_score(&defended, rem_checks)
            } else {
                let replies = defended.generate_moves_for(us);
                if replies.is_empty() {
                    Self::terminal_score(&defended, rem_checks)
                } else {
                    // Our best reply: keep checking if we can, otherwise
                    // settle for the static score
                    let mut best: Option<i32> = None;
                    for reply in replies {
                        let mut continued = defended.clone();
                        continued.make_move(reply);
                        let score = if continued.is_game_over() {
                            Self::terminal_score(&continued, rem_checks)
                        } else if continued.is_in_check(them) {
                            self.forced_check_scan(&continued, us, rem_checks - 1)
                        } else {
                            self.eval(&continued)
                        };
                        if best.map_or(true, |held| favor(score) > favor(held)) {
                            best = Some(score);
                        }
                    }
                    best.unwrap_or_else(|| self.eval(&defended))
                }
            };

            if worst.map_or(true, |held| favor(outcome) < favor(held)) {
                worst = Some(outcome);
            }
        }

        // Unreachable fallback: escapes was checked non-empty above
        worst.unwrap_or_else(|| self.eval(board))
    }
}
