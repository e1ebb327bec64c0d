//! Static evaluation: material plus piece-square bonuses.
//!
//! Scores are centipawns from White's point of view; positive favors White.
//! Table row 0 corresponds to rank 1: a White piece on rank `r` (zero-based)
//! reads row `r`, a Black piece reads the mirrored row `7 - r`, so the same
//! table serves both colors.

use super::{Board, Color, PieceKind};

pub(crate) const PAWN_VALUE: i32 = 100;
pub(crate) const KNIGHT_VALUE: i32 = 320;
pub(crate) const BISHOP_VALUE: i32 = 330;
pub(crate) const ROOK_VALUE: i32 = 500;
pub(crate) const QUEEN_VALUE: i32 = 900;
pub(crate) const KING_VALUE: i32 = 20_000;

const PST_PAWN: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [15, 15, 15, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const PST_KNIGHT: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const PST_BISHOP: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const PST_ROOK: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const PST_QUEEN: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const PST_KING_MID: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

const PST_KING_END: [[i32; 8]; 8] = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-40, -20, -10, 0, 0, -10, -20, -40],
    [-30, -10, 5, 10, 10, 5, -10, -30],
    [-20, 0, 10, 20, 20, 10, 0, -20],
    [-20, 0, 10, 20, 20, 10, 0, -20],
    [-30, -10, 5, 10, 10, 5, -10, -30],
    [-40, -20, -10, 0, 0, -10, -20, -40],
    [-50, -40, -30, -20, -20, -30, -40, -50],
];

pub(crate) fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

impl Board {
    /// Material plus piece-square score, White's point of view.
    ///
    /// The king reads its endgame table once no queen of either color is on
    /// the board, a single global phase switch that applies to both kings
    /// at once (and so flips back if a pawn promotes to a queen).
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let endgame = !self
            .grid
            .iter()
            .flatten()
            .flatten()
            .any(|p| p.kind == PieceKind::Queen);

        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let Some(piece) = self.grid[rank][file] else {
                    continue;
                };
                let row = match piece.color {
                    Color::White => rank,
                    Color::Black => 7 - rank,
                };
                let pst = match piece.kind {
                    PieceKind::Pawn => PST_PAWN[row][file],
                    PieceKind::Knight => PST_KNIGHT[row][file],
                    PieceKind::Bishop => PST_BISHOP[row][file],
                    PieceKind::Rook => PST_ROOK[row][file],
                    PieceKind::Queen => PST_QUEEN[row][file],
                    PieceKind::King => {
                        if endgame {
                            PST_KING_END[row][file]
                        } else {
                            PST_KING_MID[row][file]
                        }
                    }
                };
                score += piece.color.sign() * (piece_value(piece.kind) + pst);
            }
        }
        score
    }

    /// Material-only score, White's point of view
    #[must_use]
    pub fn evaluate_material(&self) -> i32 {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .map(|p| p.color.sign() * piece_value(p.kind))
            .sum()
    }
}
