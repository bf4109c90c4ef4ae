//! Suicide chess.
//!
//! Standard setup, no castling of either kind, and the widest promotion
//! choice of the family: anything including a pawn or a king.

use crate::piece::PieceKind;

pub(crate) const PROMOTION_KINDS: [PieceKind; 6] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
    PieceKind::King,
];

#[cfg(test)]
mod tests {
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;
    use crate::variant::Variant;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn castling_is_never_recognized() {
        let mut position = Position::with_variant(Variant::Suicide)
            .expect("suicide initial position should be well formed");
        position
            .set_fen("4k2r/8/8/8/8/8/8/4K2R w Kk - 0 1")
            .expect("castling FEN should parse");
        assert!(!Variant::Suicide.is_short_castling(&position, sq("e1"), sq("g1"), None));
        assert!(Variant::Suicide.create_short_castling(&position).is_err());
        assert!(Variant::Suicide.create_long_castling(&position).is_err());
    }

    #[test]
    fn king_to_g1_is_a_plain_king_move() {
        let mut position = Position::with_variant(Variant::Suicide)
            .expect("suicide initial position should be well formed");
        position
            .set_fen("4k2r/8/8/8/8/8/8/4K2R w Kk - 0 1")
            .expect("castling FEN should parse");
        let mv = Variant::Suicide
            .create_move(&position, sq("e1"), sq("g1"), None, None)
            .expect("king move should be constructible");
        assert!(!mv.is_castling());
        position.make_move(&mv);
        // The rook stays put.
        assert_eq!(position.piece_at(sq("h1")), Some(Piece::WHITE_ROOK));
        assert_eq!(position.piece_at(sq("g1")), Some(Piece::WHITE_KING));
    }

    #[test]
    fn pawns_may_promote_to_anything() {
        let mut position = Position::with_variant(Variant::Suicide)
            .expect("suicide initial position should be well formed");
        position
            .set_fen("4k3/8/8/8/8/8/6p1/4K3 b - - 0 1")
            .expect("promotion FEN should parse");
        let targets = Variant::Suicide
            .promotion_targets(&position, sq("g2"), sq("g1"))
            .expect("a pawn on the second rank promotes");
        assert_eq!(targets.len(), 6);
        assert!(targets.contains(&Piece::BLACK_PAWN));
        assert!(targets.contains(&Piece::BLACK_KING));
    }
}
