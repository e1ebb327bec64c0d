//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 mailbox grid of optional pieces. Supports full chess
//! rules including castling, en passant, promotions, and draw detection by
//! the fifty-move rule and threefold repetition.
//!
//! # Example
//! ```
//! use mailbox_chess::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, GameResult};
pub use types::{Color, Move, Piece, PieceKind, Square};

pub use search::{find_best_move, find_best_move_with_params, SearchParams, MATE_SCORE};

pub(crate) use types::{
    CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, PROMOTION_KINDS,
};
