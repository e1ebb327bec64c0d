//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//! ```

pub use super::{
    find_best_move, find_best_move_with_params, Board, Color, FenError, GameResult, Move,
    MoveParseError, Piece, PieceKind, SearchParams, Square, SquareError,
};
