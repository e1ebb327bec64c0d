use crate::board::attack_tables::KING_STEPS;
use crate::board::{
    Board, Color, Move, Piece, PieceKind, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

impl Board {
    pub(super) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for &to in &KING_STEPS[from.as_index()] {
            match self.piece_at(to) {
                Some(occupant) if occupant.color == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }

        // Castling is offered only from the king's home square. The
        // legality filter already rejects a king landing on an attacked
        // square, so only the in-check and transit conditions are handled
        // here.
        let home = color.home_rank();
        if from != Square(home, 4) || self.is_in_check(color) {
            return;
        }

        let (kingside_right, queenside_right) = match color {
            Color::White => (CASTLE_WHITE_K, CASTLE_WHITE_Q),
            Color::Black => (CASTLE_BLACK_K, CASTLE_BLACK_Q),
        };
        let rook = Piece::new(color, PieceKind::Rook);
        let enemy = color.opponent();

        if self.has_castling_right(kingside_right)
            && self.piece_at(Square(home, 7)) == Some(rook)
            && self.piece_at(Square(home, 5)).is_none()
            && self.piece_at(Square(home, 6)).is_none()
            && !self.is_square_attacked(Square(home, 5), enemy)
        {
            moves.push(Move::new(from, Square(home, 6)));
        }

        if self.has_castling_right(queenside_right)
            && self.piece_at(Square(home, 0)) == Some(rook)
            && self.piece_at(Square(home, 1)).is_none()
            && self.piece_at(Square(home, 2)).is_none()
            && self.piece_at(Square(home, 3)).is_none()
            && !self.is_square_attacked(Square(home, 3), enemy)
        {
            moves.push(Move::new(from, Square(home, 2)));
        }
    }
}
