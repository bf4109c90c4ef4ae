//! Giveaway chess.
//!
//! Standard setup and standard move rules; the only delta is that pawns
//! may also promote to a king.

use crate::piece::PieceKind;

pub(crate) const PROMOTION_KINDS: [PieceKind; 5] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::King,
];
