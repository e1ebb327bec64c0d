//! Canonical position serialization (FEN) and move-text handling.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    Board, Color, Move, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// At least four fields are required: placement, side to move, castling
    /// rights, en-passant target. Half-move and full-move counters are
    /// ignored when present; the clock and the repetition history restart
    /// from the loaded position, since the serialized form cannot express
    /// full-game history.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 7 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece =
                        Piece::from_symbol(c).ok_or(FenError::UnknownSymbol { symbol: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank: rank + 1 });
                    }
                    board.set_piece(Square(rank, file), piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank: rank + 1 });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights |= CASTLE_WHITE_K,
                'Q' => board.castling_rights |= CASTLE_WHITE_Q,
                'k' => board.castling_rights |= CASTLE_BLACK_K,
                'q' => board.castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { symbol: c }),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        // History restarts at the loaded position
        let key = board.position_key();
        board.repetition_counts.increment(key);
        Ok(board)
    }

    /// Replace this position with one loaded from FEN. On error the board
    /// is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::try_from_fen(fen)?;
        Ok(())
    }

    /// Parse a FEN string, panicking on malformed input.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => panic!("invalid FEN '{fen}': {err}"),
        }
    }

    /// The four-field canonical string: placement, side, castling,
    /// en-passant. This is the repetition-history key, deliberately
    /// excluding the clocks.
    #[must_use]
    pub fn position_key(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.grid[rank][file] {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut castling = String::new();
        for (bit, symbol) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.has_castling_right(bit) {
                castling.push(symbol);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{placement} {side} {castling} {ep}")
    }

    /// Full FEN with the live half-move clock and a regenerated full-move
    /// counter
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!("{} {} 1", self.position_key(), self.halfmove_clock)
    }

    /// Parse long-algebraic move text against this position, returning the
    /// matching legal move.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if self.generate_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse move text and apply it in one call. State is untouched when
    /// parsing or legality fails.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_startpos_round_trip() {
        let board = Board::try_from_fen(STARTPOS).unwrap();
        assert_eq!(
            board.position_key(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
        assert_eq!(board.to_fen(), format!("{} 0 1", board.position_key()));
    }

    #[test]
    fn test_new_board_matches_startpos_fen() {
        assert_eq!(Board::new().position_key(), Board::from_fen(STARTPOS).position_key());
    }

    #[test]
    fn test_black_to_move_with_en_passant() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_load_resets_clock_and_history() {
        let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 37");
        assert_eq!(board.halfmove_clock(), 0);
        assert!(!board.is_draw_by_repetition());
        assert_eq!(board.repetition_counts.get(&board.position_key()), 1);
    }

    #[test]
    fn test_error_too_few_fields() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewFields { found: 2 })));
    }

    #[test]
    fn test_error_wrong_rank_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert!(matches!(result, Err(FenError::WrongRankCount { found: 7 })));
    }

    #[test]
    fn test_error_unknown_symbol() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(
            result,
            Err(FenError::UnknownSymbol { symbol: 'x' })
        ));
    }

    #[test]
    fn test_error_invalid_side() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(
            result,
            Err(FenError::InvalidCastling { symbol: 'X' })
        ));
    }

    #[test]
    fn test_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_load_fen_all_or_nothing() {
        let mut board = Board::new();
        board.make_move_uci("e2e4").unwrap();
        let before = board.to_fen();
        assert!(board.load_fen("not a fen").is_err());
        assert_eq!(board.to_fen(), before);
    }

    #[test]
    fn test_partial_castling_rights() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1");
        assert!(board.has_castling_right(CASTLE_WHITE_K));
        assert!(!board.has_castling_right(CASTLE_WHITE_Q));
        assert!(!board.has_castling_right(CASTLE_BLACK_K));
        assert!(board.has_castling_right(CASTLE_BLACK_Q));
        assert_eq!(
            board.position_key(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq -"
        );
    }

    #[test]
    fn test_parse_move_legal() {
        let board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
    }

    #[test]
    fn test_parse_move_promotion() {
        let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn test_parse_move_rejects_illegal() {
        let board = Board::new();
        let result = board.parse_move("e2e5");
        assert!(matches!(result, Err(MoveParseError::IllegalMove { .. })));
    }

    #[test]
    fn test_make_move_uci_flips_side() {
        let mut board = Board::new();
        board.make_move_uci("e2e4").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = STARTPOS.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }
}
