//! Errors used throughout the chess framework.
//!
//! Two tiers, applied consistently: malformed *text* (FEN strings, square
//! and piece codes, move notation) fails with one of the dedicated format
//! errors below, while programmer-contract violations (variant mismatches,
//! out-of-range coordinates handed to infallible constructors) panic at the
//! call site. Asking a rule predicate about an illegal-but-well-formed move
//! is neither: predicates answer totally and never fail.

use thiserror::Error;

use crate::square::Square;

/// A string that does not denote a square in the `[a-h][1-8]` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid square: {0:?}")]
pub struct SquareFormatError(pub String);

/// A string that does not denote a piece in the variant's short notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid piece code: {0:?}")]
pub struct PieceFormatError(pub String);

/// Failure to interpret position text (FEN or lexicographic).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionFormatError {
    #[error("wrong number of FEN fields: expected 6, found {0}")]
    WrongFieldCount(usize),

    #[error("wrong number of ranks in the FEN board field: expected 8, found {0}")]
    WrongRankCount(usize),

    #[error("rank {0} extends beyond the board")]
    RankTooLong(usize),

    #[error("rank {0} is a few files short")]
    RankTooShort(usize),

    #[error("bad active color field: {0:?}")]
    BadSideToMove(String),

    #[error("less than 64 characters in the board string")]
    BoardStringTooShort,

    #[error(transparent)]
    BadPiece(#[from] PieceFormatError),
}

/// Failure to build a move, either from notation or from raw squares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveFormatError {
    #[error("move string too short: {0:?}")]
    TooShort(String),

    #[error(transparent)]
    BadSquare(#[from] SquareFormatError),

    #[error(transparent)]
    BadPiece(#[from] PieceFormatError),

    #[error("no piece on the starting square {0}")]
    EmptyStartingSquare(Square),

    #[error("castling is not available in this position")]
    CastlingUnavailable,
}
