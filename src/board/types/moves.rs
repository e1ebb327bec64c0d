//! Move descriptor and its long-algebraic text form.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveParseError;
use crate::board::types::square::{file_to_index, rank_to_index};

use super::piece::PieceKind;
use super::square::Square;

/// An immutable candidate transition: from-square, to-square, and an
/// optional promotion kind. Equality is structural over all fields.
///
/// A `Move` carries no legality information by itself; the board's move
/// generator decides whether it is playable in a given position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a plain move without promotion
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting pawn move
    #[inline]
    #[must_use]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion kind, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse long-algebraic move text: `e2e4`, or `e7e8q` with a trailing
    /// promotion letter of either case. Syntax only; legality is checked
    /// separately against a position.
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square_ok = |file: char, rank: char| {
            ('a'..='h').contains(&file) && ('1'..='8').contains(&rank)
        };
        if !square_ok(chars[0], chars[1]) || !square_ok(chars[2], chars[3]) {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        }

        let from = Square(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to = Square(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => {
                let kind = PieceKind::from_char(c)
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                if matches!(kind, PieceKind::Pawn | PieceKind::King) {
                    return Err(MoveParseError::InvalidPromotion { char: c });
                }
                Some(kind)
            }
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn test_parse_promotion_either_case() {
        let lower: Move = "e7e8q".parse().unwrap();
        let upper: Move = "e7e8Q".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn test_display_uses_lowercase_promotion() {
        let mv = Move::promoting(Square(6, 0), Square(7, 0), PieceKind::Knight);
        assert_eq!(mv.to_string(), "a7a8n");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            "z9z9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        assert!(matches!(
            "e7e8p".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
    }

    #[test]
    fn test_structural_equality() {
        let a: Move = "a2a4".parse().unwrap();
        let b = Move::new(Square(1, 0), Square(3, 0));
        assert_eq!(a, b);
        assert_ne!(a, Move::new(Square(1, 0), Square(2, 0)));
    }
}
