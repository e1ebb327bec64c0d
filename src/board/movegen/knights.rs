use crate::board::attack_tables::KNIGHT_STEPS;
use crate::board::{Board, Color, Move, Square};

impl Board {
    pub(super) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for &to in &KNIGHT_STEPS[from.as_index()] {
            match self.piece_at(to) {
                Some(occupant) if occupant.color == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}
