//! Legal move generation.
//!
//! Pseudo-legal moves are collected per piece in a rank-major scan of the
//! grid (a1 outward), then filtered by applying each candidate to a clone
//! and rejecting those that leave the mover's king attacked. The scan order
//! is part of the engine's deterministic tie-break behavior, so changing it
//! changes which of several equal-scoring moves the search prefers.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, PieceKind, Square};

impl Board {
    /// All legal moves for the side to move
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        self.generate_moves_for(self.side_to_move)
    }

    /// All legal moves for `color`, regardless of whose turn it is
    #[must_use]
    pub fn generate_moves_for(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                let Some(piece) = self.piece_at(from) else {
                    continue;
                };
                if piece.color != color {
                    continue;
                }
                match piece.kind {
                    PieceKind::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                    PieceKind::Knight => self.generate_knight_moves(from, color, &mut moves),
                    PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                        self.generate_sliding_moves(from, piece.kind, color, &mut moves);
                    }
                    PieceKind::King => self.generate_king_moves(from, color, &mut moves),
                }
            }
        }
        moves.retain(|&mv| self.is_legal(mv, color));
        moves
    }

    /// A pseudo-legal move is legal when the mover's king is not attacked
    /// after it is applied. Clones the position; the clone's repetition
    /// bookkeeping is irrelevant here and discarded with it.
    fn is_legal(&self, mv: Move, color: Color) -> bool {
        let mut child = self.clone();
        child.make_move(mv);
        !child.is_in_check(color)
    }

    /// Leaf node count of the legal game tree to `depth`. Standard
    /// validation yardstick for the generator and `make_move` together.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let mut child = self.clone();
            child.make_move(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}
