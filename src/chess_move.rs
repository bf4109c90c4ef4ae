//! A single ply and its derived properties.
//!
//! A [`ChessMove`] is an immutable description of one move: the two squares,
//! the moving player, and a [`MoveKind`] that pins down the special-move
//! status. Encoding the special status as a tagged union (rather than a set
//! of independent flags) makes the "a castling move has no captured piece
//! and no promotion target" invariant structural.
//!
//! Moves are normally produced by a [`Variant`](crate::variant::Variant)
//! (which derives the kind from a position by the rules of the game) or by
//! the Warren Smith parser in [`smith`](crate::smith); the fully explicit
//! [`ChessMove::new`] path exists for pre-built moves such as the canonical
//! castling constants and for tests.

use std::fmt;

use crate::piece::Piece;
use crate::player::Player;
use crate::square::Square;

/// The special-move classification of a [`ChessMove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// An ordinary move: optionally a capture, optionally a promotion,
    /// optionally a double pawn push (by file).
    Normal {
        captured: Option<Piece>,
        promotion: Option<Piece>,
        double_pawn_push_file: Option<u8>,
    },
    /// An en-passant capture of the given pawn.
    EnPassant { captured: Piece },
    ShortCastling,
    LongCastling,
}

impl MoveKind {
    /// An ordinary non-capturing, non-promoting, single-step move.
    pub const PLAIN: MoveKind = MoveKind::Normal {
        captured: None,
        promotion: None,
        double_pawn_push_file: None,
    };
}

/// An immutable description of one move in a chesslike variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    start: Square,
    end: Square,
    player: Player,
    kind: MoveKind,
    san: Option<String>,
}

impl ChessMove {
    /// Creates a move with every property supplied explicitly. The `san`
    /// string, if given, is what [`Display`](fmt::Display) reproduces.
    pub fn new(
        start: Square,
        end: Square,
        player: Player,
        kind: MoveKind,
        san: Option<String>,
    ) -> ChessMove {
        ChessMove {
            start,
            end,
            player,
            kind,
            san,
        }
    }

    /// The square the moving piece stood on before the move.
    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    /// The square the moving piece moved to.
    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    /// The player making the move.
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The pre-supplied SAN string, if any.
    pub fn san(&self) -> Option<&str> {
        self.san.as_deref()
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }

    pub fn is_short_castling(&self) -> bool {
        matches!(self.kind, MoveKind::ShortCastling)
    }

    pub fn is_long_castling(&self) -> bool {
        matches!(self.kind, MoveKind::LongCastling)
    }

    pub fn is_castling(&self) -> bool {
        self.is_short_castling() || self.is_long_castling()
    }

    /// The captured piece, or `None` if this move is not a capture.
    pub fn captured_piece(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Normal { captured, .. } => captured,
            MoveKind::EnPassant { captured } => Some(captured),
            MoveKind::ShortCastling | MoveKind::LongCastling => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    /// The piece the moving pawn promotes to, or `None`.
    pub fn promotion_target(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Normal { promotion, .. } => promotion,
            _ => None,
        }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion_target().is_some()
    }

    /// The file of the double pawn push, or `None` if this move is not a
    /// double pawn push.
    pub fn double_pawn_push_file(&self) -> Option<u8> {
        match self.kind {
            MoveKind::Normal {
                double_pawn_push_file,
                ..
            } => double_pawn_push_file,
            _ => None,
        }
    }

    /// A textual form built from the move data alone: "O-O", "O-O-O",
    /// "e2e4", or "e7e8=Q" for a promotion.
    pub fn move_string(&self) -> String {
        if self.is_short_castling() {
            "O-O".to_owned()
        } else if self.is_long_castling() {
            "O-O-O".to_owned()
        } else {
            let mut s = format!("{}{}", self.start, self.end);
            if let Some(promotion) = self.promotion_target() {
                s.push('=');
                s.push(promotion.kind.letter());
            }
            s
        }
    }
}

impl fmt::Display for ChessMove {
    /// The pre-supplied SAN string if one was given, otherwise
    /// [`ChessMove::move_string`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.san {
            Some(san) => f.write_str(san),
            None => f.write_str(&self.move_string()),
        }
    }
}
