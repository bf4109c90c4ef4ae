//! Warren Smith move notation.
//!
//! The form the chess servers transmit moves in: the origin and
//! destination squares, followed by a discriminator character where one
//! is needed. `E` marks en passant, `c` short and `C` long castling, and
//! a lowercase piece letter names an ordinary capture's victim. A
//! trailing uppercase letter from `NBRQK` names the promotion target
//! (`K` included, for the variants that allow it).
//!
//! Parsing is deliberately lenient about the discriminators: the squares
//! and the promotion letter are read from the text, everything else is
//! re-derived from the position by its variant's rules, so a move parsed
//! here is always consistent with the board it is played on.

use crate::chess_move::ChessMove;
use crate::errors::MoveFormatError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Renders a move in Warren Smith notation.
pub fn warren_smith_string(chess_move: &ChessMove) -> String {
    let mut text = format!("{}{}", chess_move.start(), chess_move.end());
    if chess_move.is_en_passant() {
        text.push('E');
    } else if chess_move.is_short_castling() {
        text.push('c');
    } else if chess_move.is_long_castling() {
        text.push('C');
    } else if let Some(captured) = chess_move.captured_piece() {
        text.push(captured.kind.letter().to_ascii_lowercase());
    }
    if let Some(promotion) = chess_move.promotion_target() {
        text.push(promotion.kind.letter());
    }
    text
}

/// Parses a move in Warren Smith notation against the given position.
/// The optional `san` string is attached to the move for display.
pub fn parse_warren_smith(
    text: &str,
    position: &Position,
    san: Option<&str>,
) -> Result<ChessMove, MoveFormatError> {
    let variant = position.variant();

    // Castling is a discriminator-only form; the squares depend on the
    // variant and the position, so the factories supply them.
    if text.ends_with('c') {
        return variant.create_short_castling(position);
    }
    if text.ends_with('C') {
        return variant.create_long_castling(position);
    }

    if text.len() < 4 || !text.is_ascii() {
        return Err(MoveFormatError::TooShort(text.to_owned()));
    }
    let start: Square = text[0..2].parse()?;
    let end: Square = text[2..4].parse()?;

    let mut promotion = None;
    if text.len() > 4 {
        if let Some(last) = text.chars().next_back() {
            if matches!(last, 'N' | 'B' | 'R' | 'Q' | 'K') {
                let adjusted = if position.current_player().is_white() {
                    last
                } else {
                    last.to_ascii_lowercase()
                };
                promotion = Piece::from_short_char(adjusted)?;
            }
        }
    }

    variant.create_move(position, start, end, promotion, san)
}
