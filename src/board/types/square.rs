//! Square type and file/rank notation helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

pub(crate) fn rank_to_index(rank: char) -> usize {
    rank as usize - ('1' as usize)
}

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is White's back rank ("1" in algebraic notation), file 0 is the
/// a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Square shifted by a (rank, file) delta, or None when off the board
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Index 0-63 (a1=0, b1=1, ..., h8=63), used by the step tables
    #[inline]
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Square {
        Square(idx / 8, idx % 8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Square, SquareError> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        Ok(Square(rank_to_index(rank), file_to_index(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Square(0, 0).to_string(), "a1");
        assert_eq!(Square(7, 7).to_string(), "h8");
        assert_eq!(Square(3, 4).to_string(), "e4");
    }

    #[test]
    fn test_parse_round_trip() {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a1b".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
        assert_eq!(Square(3, 3).offset(2, -1), Some(Square(5, 2)));
    }

    #[test]
    fn test_try_from_bounds() {
        assert!(Square::try_from((8, 0)).is_err());
        assert!(Square::try_from((0, 8)).is_err());
        assert_eq!(Square::try_from((6, 2)).unwrap(), Square(6, 2));
    }
}
