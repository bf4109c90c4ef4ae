//! The rule sets governing positions.
//!
//! A [`Variant`] bundles everything a [`Position`] delegates to its rules:
//! the initial setup, the piece notation, the special-move predicates, the
//! move factories, and the compound board update of a move. The built-in
//! variants are enum cases; a server-announced variant that plays exactly
//! like chess from a different starting position is carried as data in
//! [`Variant::Chesslike`], so no trait objects or downcasts are needed
//! anywhere.
//!
//! Entry points that take a [`Position`] insist that the position belongs
//! to this variant and panic otherwise. Handing a position to the wrong
//! rule set is a programming error, not an input error.

mod chesslike;
mod fischer_random;
mod giveaway;
mod shatranj;
mod shuffle_both;
mod suicide;

use crate::chess_move::ChessMove;
use crate::errors::{MoveFormatError, PieceFormatError, PositionFormatError};
use crate::piece::{Piece, PieceKind};
use crate::position::{Modifier, Position};
use crate::square::Square;

/// A rule set for a chesslike game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Standard chess.
    Chess,
    /// Standard rules, promotion to a king allowed.
    Giveaway,
    /// Standard rules, no castling, promotion to anything.
    Suicide,
    /// The medieval game: swapped royal setup, no castling, no en
    /// passant, promotion to the counselor only.
    Shatranj,
    /// Random back rank, bishops on opposite colors, king between the
    /// rooks, Black mirroring White.
    FischerRandom,
    /// Independently shuffled back ranks with rooks in the corners and
    /// kings on the d or e file; castling reversed when the king starts
    /// on the d file.
    ShuffleBoth,
    /// A variant that plays exactly like chess from a custom starting
    /// position, known only at runtime.
    Chesslike(ChesslikeVariant),
}

/// The data of a runtime-defined chess-rules variant: a display name and
/// the FEN it starts from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChesslikeVariant {
    name: String,
    initial_fen: String,
}

impl ChesslikeVariant {
    pub fn new(name: impl Into<String>, initial_fen: impl Into<String>) -> ChesslikeVariant {
        ChesslikeVariant {
            name: name.into(),
            initial_fen: initial_fen.into(),
        }
    }
}

impl Variant {
    /// The display name of this variant.
    pub fn name(&self) -> &str {
        match self {
            Variant::Chess => "Chess",
            Variant::Giveaway => "Giveaway",
            Variant::Suicide => "Suicide",
            Variant::Shatranj => "Shatranj",
            Variant::FischerRandom => "Fischer random",
            Variant::ShuffleBoth => "Shuffle both",
            Variant::Chesslike(custom) => &custom.name,
        }
    }

    /// Sets `position` to this variant's initial state. The shuffled
    /// variants draw a fresh random setup on every call.
    pub fn init(&self, position: &mut Position) -> Result<(), PositionFormatError> {
        self.check_position(position);
        match self {
            Variant::Chess | Variant::Giveaway | Variant::Suicide => {
                position.set_fen(chesslike::INITIAL_POSITION_FEN)
            }
            Variant::Shatranj => position.set_fen(shatranj::INITIAL_POSITION_FEN),
            Variant::FischerRandom => position.set_fen(&fischer_random::random_initial_fen()),
            Variant::ShuffleBoth => {
                position.set_lexigraphic(&shuffle_both::random_initial_lexigraphic())
            }
            Variant::Chesslike(custom) => position.set_fen(&custom.initial_fen),
        }
    }

    /// Parses one character of board text into a piece (or an empty
    /// square for `-`). Every variant of the family uses the standard
    /// piece letters.
    pub fn parse_piece(&self, c: char) -> Result<Option<Piece>, PieceFormatError> {
        Piece::from_short_char(c)
    }

    /// The textual form of a piece in this variant's notation.
    pub fn piece_to_string(&self, piece: Piece) -> String {
        piece.to_short_string()
    }

    /// Whether moving the piece on `start` to `end` would be an en
    /// passant capture under this variant's rules.
    pub fn is_en_passant(
        &self,
        position: &Position,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> bool {
        self.check_position(position);
        match self {
            Variant::Shatranj => false,
            _ => chesslike::is_en_passant(position, start, end, promotion),
        }
    }

    /// Whether moving the piece on `start` to `end` would be short
    /// castling under this variant's rules. A promotion target rules
    /// castling out.
    pub fn is_short_castling(
        &self,
        position: &Position,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> bool {
        self.check_position(position);
        match self {
            Variant::Suicide | Variant::Shatranj => false,
            Variant::FischerRandom => {
                fischer_random::is_short_castling(position, start, end, promotion)
            }
            Variant::ShuffleBoth => {
                chesslike::is_short_castling(position, start, end, promotion)
                    || shuffle_both::is_reversed_short_castling(position, start, end, promotion)
            }
            _ => chesslike::is_short_castling(position, start, end, promotion),
        }
    }

    /// Whether moving the piece on `start` to `end` would be long
    /// castling under this variant's rules.
    pub fn is_long_castling(
        &self,
        position: &Position,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
    ) -> bool {
        self.check_position(position);
        match self {
            Variant::Suicide | Variant::Shatranj => false,
            Variant::FischerRandom => {
                fischer_random::is_long_castling(position, start, end, promotion)
            }
            Variant::ShuffleBoth => {
                chesslike::is_long_castling(position, start, end, promotion)
                    || shuffle_both::is_reversed_long_castling(position, start, end, promotion)
            }
            _ => chesslike::is_long_castling(position, start, end, promotion),
        }
    }

    /// The piece the move from `start` to `end` would capture, if any.
    pub fn captured_piece(
        &self,
        position: &Position,
        start: Square,
        end: Square,
        en_passant: bool,
    ) -> Option<Piece> {
        self.check_position(position);
        chesslike::captured_piece(position, start, end, en_passant)
    }

    /// The file of the double pawn push from `start` to `end`, if the
    /// move is one.
    pub fn double_pawn_push_file(
        &self,
        position: &Position,
        start: Square,
        end: Square,
    ) -> Option<u8> {
        self.check_position(position);
        chesslike::double_pawn_push_file(position, start, end)
    }

    /// The pieces the pawn moving from `start` to `end` may promote to,
    /// or `None` if the move is not a promotion. The first entry is the
    /// variant's default choice.
    pub fn promotion_targets(
        &self,
        position: &Position,
        start: Square,
        end: Square,
    ) -> Option<Vec<Piece>> {
        self.check_position(position);
        let mover = position.piece_at(start)?;
        if !mover.is_pawn() {
            return None;
        }
        let last_rank = if mover.is_white() { 7 } else { 0 };
        if end.rank() != last_rank {
            return None;
        }
        let kinds: &[PieceKind] = match self {
            Variant::Giveaway => &giveaway::PROMOTION_KINDS,
            Variant::Suicide => &suicide::PROMOTION_KINDS,
            Variant::Shatranj => &shatranj::PROMOTION_KINDS,
            _ => &chesslike::PROMOTION_KINDS,
        };
        Some(
            kinds
                .iter()
                .map(|&kind| Piece::new(mover.player(), kind))
                .collect(),
        )
    }

    /// Builds the move from `start` to `end` in the given position,
    /// classifying it by this variant's rule predicates. Fails when the
    /// starting square is empty.
    pub fn create_move(
        &self,
        position: &Position,
        start: Square,
        end: Square,
        promotion: Option<Piece>,
        san: Option<&str>,
    ) -> Result<ChessMove, MoveFormatError> {
        self.check_position(position);
        chesslike::create_move(self, position, start, end, promotion, san)
    }

    /// Rebuilds a move against a (possibly different) position, keeping
    /// its squares, promotion target, and SAN but re-deriving its kind.
    pub fn recreate_move(
        &self,
        position: &Position,
        chess_move: &ChessMove,
    ) -> Result<ChessMove, MoveFormatError> {
        self.create_move(
            position,
            chess_move.start(),
            chess_move.end(),
            chess_move.promotion_target(),
            chess_move.san(),
        )
    }

    /// The short castling move of the player to move, if available.
    pub fn create_short_castling(
        &self,
        position: &Position,
    ) -> Result<ChessMove, MoveFormatError> {
        self.check_position(position);
        match self {
            Variant::Suicide | Variant::Shatranj => Err(MoveFormatError::CastlingUnavailable),
            Variant::FischerRandom => fischer_random::create_short_castling(position),
            Variant::ShuffleBoth => shuffle_both::create_short_castling(position),
            _ => chesslike::create_short_castling(position),
        }
    }

    /// The long castling move of the player to move, if available.
    pub fn create_long_castling(&self, position: &Position) -> Result<ChessMove, MoveFormatError> {
        self.check_position(position);
        match self {
            Variant::Suicide | Variant::Shatranj => Err(MoveFormatError::CastlingUnavailable),
            Variant::FischerRandom => fischer_random::create_long_castling(position),
            Variant::ShuffleBoth => shuffle_both::create_long_castling(position),
            _ => chesslike::create_long_castling(position),
        }
    }

    /// Applies a move to the board and gives the opponent the move.
    /// Called by [`Position::make_move`], which fires the notifications
    /// once this returns.
    pub fn make_move(&self, chess_move: &ChessMove, board: &mut Modifier<'_>) {
        self.check_position(board.position());
        match self {
            Variant::FischerRandom if chess_move.is_castling() => {
                fischer_random::apply_castling(chess_move, board)
            }
            Variant::ShuffleBoth if chess_move.is_castling() => {
                shuffle_both::apply_castling(chess_move, board)
            }
            _ => chesslike::make_chess_move(chess_move, board),
        }
    }

    fn check_position(&self, position: &Position) {
        assert!(
            position.variant() == self,
            "position belongs to the {} variant, not {}",
            position.variant().name(),
            self.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    use super::{ChesslikeVariant, Variant};

    fn sq(s: &str) -> Square {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn names() {
        assert_eq!(Variant::Chess.name(), "Chess");
        assert_eq!(Variant::FischerRandom.name(), "Fischer random");
        let custom = Variant::Chesslike(ChesslikeVariant::new(
            "Pawns only",
            "8/pppppppp/8/8/8/8/PPPPPPPP/8 w - - 0 1",
        ));
        assert_eq!(custom.name(), "Pawns only");
    }

    #[test]
    fn chesslike_variant_starts_from_its_own_fen() {
        let custom = Variant::Chesslike(ChesslikeVariant::new(
            "Pawns only",
            "8/pppppppp/8/8/8/8/PPPPPPPP/8 w - - 0 1",
        ));
        let position =
            Position::with_variant(custom).expect("custom initial position should be well formed");
        assert_eq!(position.piece_at(sq("e2")), Some(Piece::WHITE_PAWN));
        assert_eq!(position.piece_at(sq("e1")), None);
    }

    #[test]
    fn chesslike_variant_with_a_bad_fen_fails_to_init() {
        let custom = Variant::Chesslike(ChesslikeVariant::new("Broken", "not a fen"));
        assert!(Position::with_variant(custom).is_err());
    }

    #[test]
    fn recreate_move_rederives_the_kind() {
        let mut position = Position::new();
        position
            .set_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1")
            .expect("en passant FEN should parse");
        let mv = Variant::Chess
            .create_move(&position, sq("e5"), sq("d6"), None, None)
            .expect("en passant move should be constructible");
        assert!(mv.is_en_passant());

        // In a position without the passed pawn the same squares make a
        // plain pawn push.
        let mut other = Position::new();
        other
            .set_fen("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1")
            .expect("plain pawn FEN should parse");
        let recreated = Variant::Chess
            .recreate_move(&other, &mv)
            .expect("move should be recreatable");
        assert!(!recreated.is_en_passant());
        assert_eq!(recreated.start(), mv.start());
        assert_eq!(recreated.end(), mv.end());
    }

    #[test]
    fn promotion_targets_require_a_pawn_on_the_last_rank() {
        let position = Position::new();
        assert_eq!(
            Variant::Chess.promotion_targets(&position, sq("e2"), sq("e4")),
            None
        );
        assert_eq!(
            Variant::Chess.promotion_targets(&position, sq("g1"), sq("f3")),
            None
        );
    }

    #[test]
    fn standard_promotion_targets_are_queen_first() {
        let mut position = Position::new();
        position
            .set_fen("4k3/6P1/8/8/8/8/8/4K3 w - - 0 1")
            .expect("promotion FEN should parse");
        let targets = Variant::Chess
            .promotion_targets(&position, sq("g7"), sq("g8"))
            .expect("a pawn on the seventh rank promotes");
        assert_eq!(
            targets,
            vec![
                Piece::WHITE_QUEEN,
                Piece::WHITE_ROOK,
                Piece::WHITE_BISHOP,
                Piece::WHITE_KNIGHT
            ]
        );
    }

    #[test]
    #[should_panic]
    fn rule_queries_reject_a_foreign_position() {
        let position = Position::new();
        let _ = Variant::Suicide.create_short_castling(&position);
    }
}
