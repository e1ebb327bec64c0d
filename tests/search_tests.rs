//! Search tests to verify the engine finds correct moves in various positions.

use std::time::Duration;

use mailbox_chess::{find_best_move, find_best_move_with_params, Board, SearchParams};

const BUDGET: Duration = Duration::from_millis(500);

/// The engine finds a simple back-rank mate
#[test]
fn finds_mate_in_one_back_rank() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let best = find_best_move(&board, BUDGET).expect("should find a move");
    assert_eq!(best.to_string(), "e1e8", "should find Qe8#");
}

/// The engine finds the scholar's mate finish
#[test]
fn finds_scholars_mate() {
    let board = Board::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
    );
    let best = find_best_move(&board, BUDGET).expect("should find a move");
    assert_eq!(best.to_string(), "h5f7", "should find Qxf7#");
}

/// The engine does not leave its queen where a pawn takes it
#[test]
fn avoids_hanging_queen() {
    let board =
        Board::from_fen("r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3");
    let best = find_best_move(&board, BUDGET).expect("should find a move");
    assert_ne!(best.to_string(), "f3c6", "should not hang the queen on c6");
}

/// The engine takes an undefended rook
#[test]
fn captures_hanging_rook() {
    let board = Board::from_fen("6k1/8/8/3r4/8/8/8/3R2K1 w - - 0 1");
    let best = find_best_move(&board, BUDGET).expect("should find a move");
    assert_eq!(best.to_string(), "d1d5", "should take the free rook");
}

/// When the clear best move does not depend on depth, repeated searches
/// agree
#[test]
fn search_is_repeatable() {
    let board = Board::from_fen("6k1/8/8/3r4/8/8/8/3R2K1 w - - 0 1");
    let first = find_best_move(&board, BUDGET);
    let second = find_best_move(&board, Duration::from_millis(100));
    assert_eq!(first, second);
}

/// Every configuration switch still yields a legal answer from the same
/// middlegame position
#[test]
fn all_configurations_answer_legally() {
    let board = Board::from_fen(
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 4 4",
    );
    let legal = board.generate_moves();
    for params in [
        SearchParams::default(),
        SearchParams {
            order_moves: false,
            quiescence: false,
            positional_eval: false,
            forced_check_depth: 0,
            depth_step: 1,
        },
    ] {
        let best = find_best_move_with_params(&board, Duration::from_millis(200), &params)
            .expect("should find a move");
        assert!(legal.contains(&best));
    }
}
