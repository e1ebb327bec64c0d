//! Precomputed step tables for the leaper pieces.
//!
//! For each of the 64 squares, the in-bounds destination squares a knight or
//! king can step to. Shared between move generation and attack detection so
//! both walk the same offsets.

use once_cell::sync::Lazy;

use super::types::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn build_steps(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

pub(crate) static KNIGHT_STEPS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_steps(&KNIGHT_DELTAS));

pub(crate) static KING_STEPS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build_steps(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_knight_has_two_steps() {
        assert_eq!(KNIGHT_STEPS[Square(0, 0).as_index()].len(), 2);
        assert_eq!(KNIGHT_STEPS[Square(7, 7).as_index()].len(), 2);
    }

    #[test]
    fn test_central_knight_has_eight_steps() {
        assert_eq!(KNIGHT_STEPS[Square(3, 3).as_index()].len(), 8);
    }

    #[test]
    fn test_king_step_counts() {
        assert_eq!(KING_STEPS[Square(0, 0).as_index()].len(), 3);
        assert_eq!(KING_STEPS[Square(0, 4).as_index()].len(), 5);
        assert_eq!(KING_STEPS[Square(4, 4).as_index()].len(), 8);
    }
}
