//! Shatranj.
//!
//! The medieval ancestor: king and counselor swap places relative to the
//! modern setup, there is no castling and no en passant, and a pawn
//! reaching the far rank becomes a counselor (represented here by the
//! queen) with no other choice. The double pawn push is left to the
//! standard rule, matching how the game is played on the servers this
//! library talks to.

use crate::piece::PieceKind;

pub(crate) const INITIAL_POSITION_FEN: &str =
    "rnbkqbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBKQBNR w - - 0 1";

pub(crate) const PROMOTION_KINDS: [PieceKind; 1] = [PieceKind::Queen];

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
    fn king_and_queen_are_swapped_in_the_setup() {
        let position = Position::with_variant(Variant::Shatranj)
            .expect("shatranj initial position should be well formed");
        assert_eq!(position.piece_at(sq("d1")), Some(Piece::WHITE_KING));
        assert_eq!(position.piece_at(sq("e1")), Some(Piece::WHITE_QUEEN));
        assert_eq!(position.piece_at(sq("d8")), Some(Piece::BLACK_KING));
        assert_eq!(position.piece_at(sq("e8")), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn en_passant_never_exists() {
        let mut position = Position::with_variant(Variant::Shatranj)
            .expect("shatranj initial position should be well formed");
        position
            .set_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1")
            .expect("en passant FEN should parse");
        assert!(!Variant::Shatranj.is_en_passant(&position, sq("e5"), sq("d6"), None));
        let mv = Variant::Shatranj
            .create_move(&position, sq("e5"), sq("d6"), None, None)
            .expect("pawn move should be constructible");
        assert!(!mv.is_en_passant());
        assert!(!mv.is_capture());
    }

    #[test]
    fn castling_is_never_recognized() {
        let mut position = Position::with_variant(Variant::Shatranj)
            .expect("shatranj initial position should be well formed");
        position
            .set_fen("4k2r/8/8/8/8/8/8/4K2R w - - 0 1")
            .expect("castling FEN should parse");
        assert!(!Variant::Shatranj.is_short_castling(&position, sq("e1"), sq("g1"), None));
        assert!(Variant::Shatranj.create_short_castling(&position).is_err());
    }

    #[test]
    fn promotion_is_to_the_counselor_only() {
        let mut position = Position::with_variant(Variant::Shatranj)
            .expect("shatranj initial position should be well formed");
        position
            .set_fen("4k3/6P1/8/8/8/8/8/4K3 w - - 0 1")
            .expect("promotion FEN should parse");
        let targets = Variant::Shatranj
            .promotion_targets(&position, sq("g7"), sq("g8"))
            .expect("a pawn on the seventh rank promotes");
        assert_eq!(targets, vec![Piece::WHITE_QUEEN]);
    }
}
