use std::collections::HashMap;

use super::attack_tables::{BISHOP_DIRS, KING_STEPS, KNIGHT_STEPS, ROOK_DIRS};
use super::{
    Color, Move, Piece, PieceKind, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// Outcome classification of a position. Recomputed on demand, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameResult {
    Ongoing,
    Draw,
    WhiteWins,
    BlackWins,
}

/// Occurrence counts of canonical position strings, for threefold
/// repetition detection.
#[derive(Clone, Debug)]
pub(crate) struct RepetitionTable {
    counts: HashMap<String, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: String) -> u32 {
        let entry = self.counts.entry(key).or_insert(0);
        *entry += 1;
        *entry
    }
}

/// The position state machine: an 8x8 mailbox grid plus the auxiliary state
/// needed for full rules (side to move, castling rights, en-passant target,
/// half-move clock, repetition history).
///
/// Mutated in place one ply at a time by [`Board::make_move`]; the search
/// engine explores continuations on wholesale clones, so there is no undo.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: u8,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) repetition_counts: RepetitionTable,
}

impl Board {
    /// Standard start position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Piece::new(Color::White, kind));
            board.set_piece(Square(1, file), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(6, file), Piece::new(Color::Black, PieceKind::Pawn));
            board.set_piece(Square(7, file), Piece::new(Color::Black, kind));
        }
        board.castling_rights = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;
        let key = board.position_key();
        board.repetition_counts.increment(key);
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            repetition_counts: RepetitionTable::new(),
        }
    }

    /// Piece at a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank()][sq.file()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.rank()][sq.file()] = Some(piece);
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.grid[sq.rank()][sq.file()] = None;
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Plies since the last pawn move or capture
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Current en-passant target square, if the previous ply was a
    /// two-square pawn advance
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Whether the given castling right bit is still held
    #[inline]
    #[must_use]
    pub(crate) fn has_castling_right(&self, bit: u8) -> bool {
        self.castling_rights & bit != 0
    }

    /// Locate a color's king. A legal position always has one; `None` only
    /// occurs on malformed hand-built boards.
    #[must_use]
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = self.grid[rank][file] {
                    if piece.color == color && piece.is_king() {
                        return Some(Square(rank, file));
                    }
                }
            }
        }
        None
    }

    /// Apply one ply. The move is assumed legal; feeding an arbitrary move
    /// corrupts the position rather than erroring, exactly like pushing an
    /// illegal move on a physical board.
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let Some(piece) = self.piece_at(from) else {
            debug_assert!(false, "make_move from empty square {from}");
            return;
        };
        let mut captured = self.piece_at(to);

        // Castling rights: king moves revoke both of that color's rights,
        // rook moves from an original corner revoke the matching one. The
        // corner check uses the move's origin square, so a rook that left
        // and came back cannot resurrect a right.
        match piece.kind {
            PieceKind::King => {
                self.castling_rights &= match piece.color {
                    Color::White => !(CASTLE_WHITE_K | CASTLE_WHITE_Q),
                    Color::Black => !(CASTLE_BLACK_K | CASTLE_BLACK_Q),
                };
            }
            PieceKind::Rook => {
                let home = piece.color.home_rank();
                if from == Square(home, 0) {
                    self.castling_rights &= match piece.color {
                        Color::White => !CASTLE_WHITE_Q,
                        Color::Black => !CASTLE_BLACK_Q,
                    };
                } else if from == Square(home, 7) {
                    self.castling_rights &= match piece.color {
                        Color::White => !CASTLE_WHITE_K,
                        Color::Black => !CASTLE_BLACK_K,
                    };
                }
            }
            _ => {}
        }

        // En-passant target: set only by a two-square pawn advance, to the
        // square passed over; cleared by every other move.
        self.en_passant_target = if piece.is_pawn() && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };

        // En-passant capture: a pawn changing file onto an empty square
        // takes the pawn sitting on its own origin rank in the target file.
        if piece.is_pawn() && from.file() != to.file() && captured.is_none() {
            let victim_sq = Square(from.rank(), to.file());
            captured = self.piece_at(victim_sq);
            self.clear_square(victim_sq);
        }

        // Castling: a king moving two files drags the rook to the square it
        // crossed.
        if piece.is_king() && from.file().abs_diff(to.file()) == 2 {
            let home = from.rank();
            if to.file() == 6 {
                let rook = self.piece_at(Square(home, 7));
                self.clear_square(Square(home, 7));
                if let Some(rook) = rook {
                    self.set_piece(Square(home, 5), rook);
                }
            } else {
                let rook = self.piece_at(Square(home, 0));
                self.clear_square(Square(home, 0));
                if let Some(rook) = rook {
                    self.set_piece(Square(home, 3), rook);
                }
            }
        }

        // Piece placement, replacing the pawn on promotion
        let placed = match mv.promotion() {
            Some(kind) if piece.is_pawn() => Piece::new(piece.color, kind),
            _ => piece,
        };
        self.set_piece(to, placed);
        self.clear_square(from);

        // Half-move clock resets exactly on a pawn advance or any capture
        let pawn_advance = piece.is_pawn() && from.rank() != to.rank();
        if pawn_advance || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.side_to_move = self.side_to_move.opponent();

        let key = self.position_key();
        self.repetition_counts.increment(key);
    }

    /// True if any piece of `by` attacks `sq`.
    ///
    /// Checks knights and kings via the step tables, pawns via the two
    /// diagonal squares behind `sq` relative to `by`'s advance direction,
    /// and sliders by scanning outward along each ray until the first
    /// occupant (which blocks regardless of color).
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        for &step in &KNIGHT_STEPS[sq.as_index()] {
            if self.piece_at(step) == Some(Piece::new(by, PieceKind::Knight)) {
                return true;
            }
        }

        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(origin) = sq.offset(behind, df) {
                if self.piece_at(origin) == Some(Piece::new(by, PieceKind::Pawn)) {
                    return true;
                }
            }
        }

        for &(dirs, diagonal) in &[(&ROOK_DIRS, false), (&BISHOP_DIRS, true)] {
            for &(dr, df) in dirs {
                let mut cursor = sq.offset(dr, df);
                while let Some(here) = cursor {
                    if let Some(piece) = self.piece_at(here) {
                        if piece.color == by {
                            let slides = if diagonal {
                                matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
                            } else {
                                matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
                            };
                            if slides {
                                return true;
                            }
                        }
                        break;
                    }
                    cursor = here.offset(dr, df);
                }
            }
        }

        for &step in &KING_STEPS[sq.as_index()] {
            if self.piece_at(step) == Some(Piece::new(by, PieceKind::King)) {
                return true;
            }
        }

        false
    }

    /// True if `color`'s king is attacked by the opponent
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked(sq, color.opponent()),
            None => false,
        }
    }

    /// Side to move is in check and has no legal moves
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move)
            && self.generate_moves_for(self.side_to_move).is_empty()
    }

    /// Side to move is not in check and has no legal moves
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move)
            && self.generate_moves_for(self.side_to_move).is_empty()
    }

    /// 100 plies without a pawn move or capture
    #[must_use]
    pub fn is_draw_by_fifty_moves(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// The current canonical position has occurred three or more times
    #[must_use]
    pub fn is_draw_by_repetition(&self) -> bool {
        self.repetition_counts.get(&self.position_key()) >= 3
    }

    /// Classify the position. Checkmate takes precedence (winner is the
    /// opponent of the side to move); stalemate, the fifty-move rule, and
    /// repetition all yield a draw.
    #[must_use]
    pub fn game_result(&self) -> GameResult {
        if self.is_checkmate() {
            return match self.side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            };
        }
        if self.is_stalemate() || self.is_draw_by_fifty_moves() || self.is_draw_by_repetition() {
            return GameResult::Draw;
        }
        GameResult::Ongoing
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_result() != GameResult::Ongoing
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
