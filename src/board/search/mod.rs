//! Best-move search: iterative deepening over alpha-beta min-max.
//!
//! Scores are always from White's point of view; White is the maximizing
//! player and Black the minimizing player at every node. The search runs
//! against a cooperative deadline: expiry surfaces as `None` from the node
//! functions, and the driver discards the partially-searched depth and
//! answers from the last completed one.

mod alphabeta;
mod forced;
mod order;
mod quiescence;

use std::time::{Duration, Instant};

use super::{Board, Color, Move};

/// Base score of a forced mate. A mate found with `d` plies of remaining
/// depth scores `MATE_SCORE + d` (negated for Black), so nearer mates
/// dominate deeper ones.
pub const MATE_SCORE: i32 = 100_000_000;

/// Plies of quiescence extension past the nominal horizon
const MAX_QSEARCH_DEPTH: u32 = 4;

/// Tunable switches for the search. The defaults give the strongest
/// configuration; the switches exist to degrade it piecewise, mostly for
/// testing one mechanism against another.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Sort moves by tactical promise before searching them
    pub order_moves: bool,
    /// Extend past the horizon through captures and checks
    pub quiescence: bool,
    /// Use piece-square evaluation at the leaves instead of bare material
    pub positional_eval: bool,
    /// Plies of forced-check verification applied to root moves that give
    /// check; 0 disables the scan
    pub forced_check_depth: u32,
    /// Iterative deepening increment
    pub depth_step: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            order_moves: true,
            quiescence: true,
            positional_eval: true,
            forced_check_depth: 3,
            depth_step: 2,
        }
    }
}

/// Wall-clock deadline shared by every node of one search
pub(super) struct SearchClock {
    start: Instant,
    limit: Duration,
}

impl SearchClock {
    fn new(limit: Duration) -> Self {
        SearchClock {
            start: Instant::now(),
            limit,
        }
    }

    #[inline]
    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Score plus the line that achieves it. Lives only inside one search;
/// never persisted.
#[derive(Clone, Debug)]
pub(super) struct SearchResult {
    pub(super) score: i32,
    pub(super) pv: Vec<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        SearchResult {
            score,
            pv: Vec::new(),
        }
    }

    /// Extend the line backwards with the move that led here
    fn through(mv: Move, child: SearchResult) -> Self {
        let mut pv = Vec::with_capacity(child.pv.len() + 1);
        pv.push(mv);
        pv.extend(child.pv);
        SearchResult {
            score: child.score,
            pv,
        }
    }
}

fn format_pv(pv: &[Move]) -> String {
    pv.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) struct SearchContext<'a> {
    params: &'a SearchParams,
    clock: SearchClock,
    nodes: u64,
}

impl SearchContext<'_> {
    /// Leaf evaluation, per the positional switch
    fn eval(&self, board: &Board) -> i32 {
        if self.params.positional_eval {
            board.evaluate()
        } else {
            board.evaluate_material()
        }
    }

    /// Score a finished game. Mates are graded by remaining depth so the
    /// search prefers the shortest path in and the longest path out.
    fn terminal_score(board: &Board, remaining_depth: u32) -> i32 {
        match board.game_result() {
            super::GameResult::Draw => 0,
            super::GameResult::WhiteWins => MATE_SCORE + remaining_depth as i32,
            super::GameResult::BlackWins => -(MATE_SCORE + remaining_depth as i32),
            super::GameResult::Ongoing => {
                debug_assert!(false, "terminal_score on ongoing position");
                0
            }
        }
    }
}

/// Search with the default configuration
#[must_use]
pub fn find_best_move(board: &Board, time_limit: Duration) -> Option<Move> {
    find_best_move_with_params(board, time_limit, &SearchParams::default())
}

/// Iterative-deepening driver. Returns `None` only when the side to move
/// has no legal moves; otherwise some legal move is always returned, even
/// on an already-expired clock.
///
/// Each depth rescans all root moves; the first strictly-improving move in
/// generation (or ordered) sequence wins ties, which together with the
/// deterministic generator makes the choice reproducible. A depth cut off
/// by the deadline is discarded wholesale so the answer never mixes depths.
#[must_use]
pub fn find_best_move_with_params(
    board: &Board,
    time_limit: Duration,
    params: &SearchParams,
) -> Option<Move> {
    let mut moves = board.generate_moves();
    if moves.is_empty() {
        return None;
    }
    if moves.len() == 1 {
        return Some(moves[0]);
    }

    let us = board.side_to_move();
    let mut ctx = SearchContext {
        params,
        clock: SearchClock::new(time_limit),
        nodes: 0,
    };
    if params.order_moves {
        ctx.order_moves(board, &mut moves);
    }
    // Seed with the first ordered move so an expired clock still answers
    let mut best = moves[0];

    let mut depth = 1;
    loop {
        let Some(depth_best) = ctx.search_root(board, &moves, us, depth) else {
            log::info!("deadline hit inside depth {depth}, keeping {best}");
            break;
        };
        best = depth_best.pv[0];
        let score = depth_best.score;
        log::info!(
            "depth {depth}: score {score} pv {} ({} nodes)",
            format_pv(&depth_best.pv),
            ctx.nodes
        );

        if score.abs() >= MATE_SCORE {
            break;
        }
        depth += params.depth_step.max(1);
        if ctx.clock.expired() {
            break;
        }
    }

    Some(best)
}

impl SearchContext<'_> {
    /// One full-width scan of the root moves at `depth`. `None` means the
    /// deadline expired partway through; the caller discards the depth.
    /// The returned variation starts with the chosen root move.
    fn search_root(
        &mut self,
        board: &Board,
        moves: &[Move],
        us: Color,
        depth: u32,
    ) -> Option<SearchResult> {
        let maximizing = us == Color::White;
        let mut best: Option<SearchResult> = None;

        for &mv in moves {
            let mut child = board.clone();
            child.make_move(mv);

            let immediate = child.is_game_over();
            let reply = if immediate {
                // Graded above anything the deeper channels can report, so
                // a mate on the board always beats a mate behind more moves
                let grade = depth + self.params.forced_check_depth;
                SearchResult::leaf(Self::terminal_score(&child, grade))
            } else if self.params.forced_check_depth > 0 && child.is_in_check(us.opponent()) {
                let score = self.forced_check_scan(&child, us, self.params.forced_check_depth);
                SearchResult::leaf(score)
            } else {
                self.alphabeta(&child, depth - 1, !maximizing, i32::MIN, i32::MAX)?
            };
            log::debug!("depth {depth} | {mv} -> {}", reply.score);

            let improves = best.as_ref().map_or(true, |held| {
                if maximizing {
                    reply.score > held.score
                } else {
                    reply.score < held.score
                }
            });
            let score = reply.score;
            if improves {
                best = Some(SearchResult::through(mv, reply));
            }
            // Only an immediate mate ends the scan early: a deeper forced
            // mate can still be beaten by a shorter one later in the list
            if immediate && us.sign() * score >= MATE_SCORE {
                break;
            }
        }
        best
    }
}
