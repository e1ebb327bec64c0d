//! Core value types: colors, pieces, squares, and moves.

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;

// Castling right bits, one per (color, side) pair. Rights only ever get
// cleared after the initial position or FEN load, never set again.
pub(crate) const CASTLE_WHITE_K: u8 = 0b0001;
pub(crate) const CASTLE_WHITE_Q: u8 = 0b0010;
pub(crate) const CASTLE_BLACK_K: u8 = 0b0100;
pub(crate) const CASTLE_BLACK_Q: u8 = 0b1000;
