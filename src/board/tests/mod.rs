//! Board module tests.
//!
//! Organized by category:
//! - `perft.rs` - move generation node counts against known totals
//! - `draw.rs` - fifty-move rule and threefold repetition
//! - `edge_cases.rs` - castling, en passant, promotion, mate detection
//! - `search.rs` - engine behavior through the public search API
//! - `playout.rs` - randomized full-game invariants

mod perft;
