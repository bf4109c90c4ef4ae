//! Chess pieces.
//!
//! A [`Piece`] is a (color, kind) value; the twelve possible combinations
//! are exposed as associated constants. An empty square is represented by
//! the absence of a piece (`Option::None`), never by a piece value.
//!
//! The short textual notation is one character per piece: `P N B R Q K`,
//! uppercase for White and lowercase for Black, with `-` standing for an
//! empty square. [`Piece::from_short_str`] and [`Piece::to_short_string`]
//! are strict inverses of each other.

use std::fmt;

use crate::errors::PieceFormatError;
use crate::player::Player;

/// The kind of a chess piece, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The uppercase notation letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// The full kind name, "Knight" for a knight for example.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

/// A chess piece: a color and a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Player,
    pub kind: PieceKind,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Player::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Player::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Player::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Player::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Player::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Player::White, PieceKind::King);

    pub const BLACK_PAWN: Piece = Piece::new(Player::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Player::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Player::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Player::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Player::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Player::Black, PieceKind::King);

    #[inline]
    pub const fn new(color: Player, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// The player this piece belongs to.
    #[inline]
    pub const fn player(self) -> Player {
        self.color
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        self.color.is_white()
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        self.color.is_black()
    }

    #[inline]
    pub fn is_same_color_as(self, other: Piece) -> bool {
        self.color == other.color
    }

    #[inline]
    pub fn is_same_kind_as(self, other: Piece) -> bool {
        self.kind == other.kind
    }

    #[inline]
    pub fn is_pawn(self) -> bool {
        self.kind == PieceKind::Pawn
    }

    #[inline]
    pub fn is_knight(self) -> bool {
        self.kind == PieceKind::Knight
    }

    #[inline]
    pub fn is_bishop(self) -> bool {
        self.kind == PieceKind::Bishop
    }

    #[inline]
    pub fn is_rook(self) -> bool {
        self.kind == PieceKind::Rook
    }

    #[inline]
    pub fn is_queen(self) -> bool {
        self.kind == PieceKind::Queen
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// The single-character notation for this piece: the kind letter,
    /// uppercase for White and lowercase for Black.
    pub fn to_short_char(self) -> char {
        let letter = self.kind.letter();
        if self.is_white() {
            letter
        } else {
            letter.to_ascii_lowercase()
        }
    }

    /// Same as [`Piece::to_short_char`], as an owned string.
    pub fn to_short_string(self) -> String {
        self.to_short_char().to_string()
    }

    /// Parses the notation produced by [`Piece::to_short_string`].
    /// `"-"` denotes an empty square and maps to `None`.
    pub fn from_short_str(s: &str) -> Result<Option<Piece>, PieceFormatError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_short_char(c).map_err(|_| PieceFormatError(s.to_owned())),
            _ => Err(PieceFormatError(s.to_owned())),
        }
    }

    /// Single-character version of [`Piece::from_short_str`].
    pub fn from_short_char(c: char) -> Result<Option<Piece>, PieceFormatError> {
        let piece = match c {
            '-' => return Ok(None),
            'P' => Piece::WHITE_PAWN,
            'N' => Piece::WHITE_KNIGHT,
            'B' => Piece::WHITE_BISHOP,
            'R' => Piece::WHITE_ROOK,
            'Q' => Piece::WHITE_QUEEN,
            'K' => Piece::WHITE_KING,
            'p' => Piece::BLACK_PAWN,
            'n' => Piece::BLACK_KNIGHT,
            'b' => Piece::BLACK_BISHOP,
            'r' => Piece::BLACK_ROOK,
            'q' => Piece::BLACK_QUEEN,
            'k' => Piece::BLACK_KING,
            _ => return Err(PieceFormatError(c.to_string())),
        };
        Ok(Some(piece))
    }

    /// All twelve pieces, white then black, pawns first.
    pub const ALL: [Piece; 12] = [
        Piece::WHITE_PAWN,
        Piece::WHITE_KNIGHT,
        Piece::WHITE_BISHOP,
        Piece::WHITE_ROOK,
        Piece::WHITE_QUEEN,
        Piece::WHITE_KING,
        Piece::BLACK_PAWN,
        Piece::BLACK_KNIGHT,
        Piece::BLACK_BISHOP,
        Piece::BLACK_ROOK,
        Piece::BLACK_QUEEN,
        Piece::BLACK_KING,
    ];
}

impl fmt::Display for Piece {
    /// "White Queen", "Black Pawn", etc.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind.name())
    }
}
