pub mod board;

pub use board::{Board, Color, GameResult, Move, Piece, PieceKind, Square};
pub use board::{find_best_move, find_best_move_with_params, SearchParams};
