//! Error types for board operations.

use std::fmt;

/// Error type for canonical position string (FEN) parsing failures.
///
/// Loading is all-or-nothing: when any of these is returned, the target
/// board is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the 4 required whitespace-separated fields
    TooFewFields { found: usize },
    /// Placement does not describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Unrecognized symbol in the placement field
    UnknownSymbol { symbol: char },
    /// A rank describes more than 8 files
    TooManyFiles { rank: usize },
    /// Side-to-move field is not 'w' or 'b'
    InvalidSideToMove { found: String },
    /// Castling field contains a letter outside KQkq-
    InvalidCastling { symbol: char },
    /// En-passant field is neither '-' nor a valid square
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::UnknownSymbol { symbol } => {
                write!(f, "Unknown piece symbol '{symbol}' in FEN")
            }
            FenError::TooManyFiles { rank } => {
                write!(f, "More than 8 files in FEN rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { symbol } => {
                write!(f, "Invalid castling symbol '{symbol}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for long-algebraic move text failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move text has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move text
    InvalidSquare { notation: String },
    /// Invalid promotion piece letter
    InvalidPromotion { char: char },
    /// Syntactically valid move that is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move text must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_messages_carry_context() {
        let err = FenError::TooFewFields { found: 2 };
        assert!(err.to_string().contains('2'));
        let err = FenError::UnknownSymbol { symbol: 'z' };
        assert!(err.to_string().contains("'z'"));
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_move_error_messages_carry_context() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_messages_carry_context() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = FenError::InvalidCastling { symbol: 'x' };
        assert_eq!(a, a.clone());
    }
}
