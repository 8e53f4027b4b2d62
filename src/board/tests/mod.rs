//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `draw.rs` - Repetition tracking and clocks
//! - `edge_cases.rs` - Castling, en passant, promotion and pins
//! - `proptest.rs` - Property-based tests over random games
//! - `search.rs` - Alpha-beta against plain minimax

mod draw;
mod search;
