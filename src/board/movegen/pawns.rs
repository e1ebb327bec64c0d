use crate::board::{Board, Color, Move, Square, PROMOTION_KINDS};

impl Board {
    /// Pawn pushes, captures, en-passant, and promotions from `from`.
    ///
    /// A move onto the promotion rank fans out into one candidate per
    /// promotable kind, queen first.
    pub(super) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.piece_at(one).is_none() {
                self.push_pawn_move(from, one, color, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            let ordinary_capture = self
                .piece_at(target)
                .is_some_and(|victim| victim.color != color);
            let en_passant = self.en_passant_target == Some(target);
            if ordinary_capture || en_passant {
                self.push_pawn_move(from, target, color, moves);
            }
        }
    }

    fn push_pawn_move(&self, from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
        if to.rank() == color.pawn_promotion_rank() {
            for &kind in &PROMOTION_KINDS {
                moves.push(Move::promoting(from, to, kind));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }
}
