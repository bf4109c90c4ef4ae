//! Crate root module declarations for the wildchess framework.
//!
//! This file exposes all top-level subsystems (board primitives, moves,
//! positions with their listener machinery, the variant rule sets, and the
//! Warren Smith wire notation) so binaries, tests, and external tooling can
//! import stable module paths.

pub mod chess_move;
pub mod errors;
pub mod piece;
pub mod player;
pub mod position;
pub mod smith;
pub mod square;
pub mod variant;
