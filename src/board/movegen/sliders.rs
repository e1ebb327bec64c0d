use crate::board::attack_tables::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::board::{Board, Color, Move, PieceKind, Square};

impl Board {
    /// Ray moves for bishops, rooks, and queens. Each ray extends through
    /// empty squares and stops at the first occupant, which is captured if
    /// it belongs to the opponent.
    pub(super) fn generate_sliding_moves(
        &self,
        from: Square,
        kind: PieceKind,
        color: Color,
        moves: &mut Vec<Move>,
    ) {
        let dirs: &[(isize, isize)] = match kind {
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Rook => &ROOK_DIRS,
            _ => &QUEEN_DIRS,
        };

        for &(dr, df) in dirs {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::new(from, to));
                        cursor = to.offset(dr, df);
                    }
                    Some(occupant) => {
                        if occupant.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
