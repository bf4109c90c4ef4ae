//! The shared rules core of chesslike variants.
//!
//! Standard chess and most of its relatives agree on almost everything:
//! how en passant looks, what a double pawn push is, how a move is applied
//! to the board. The free functions here implement that common core; the
//! [`Variant`](super::Variant) dispatch calls them directly for standard
//! chess and combines them with small deltas for the wild variants.
//!
//! All predicates are total. They answer questions about *well-formed*
//! moves, not legal ones: asked about a square with no piece on it, they
//! return `false` or `None` rather than fault. Legality checking belongs
//! to whoever generates or validates moves, not to this layer.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::MoveFormatError;
use crate::piece::{Piece, PieceKind};
use crate::player::Player;
use crate::position::{Modifier, Position};
use crate::square::Square;

/// The initial position of standard chess (and of the variants that
/// start from the standard setup).
pub(crate) const INITIAL_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Standard promotion choices, queen first as the implied default.
pub(crate) const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// The back rank of the given player.
#[inline]
pub(crate) fn home_rank(player: Player) -> u8 {
    if player.is_white() {
        0
    } else {
        7
    }
}

/// Whether moving the piece on `start` to `end` is an en passant capture:
/// a pawn stepping diagonally onto an empty square, with an opposing pawn
/// standing on the crossing of the destination file and the origin rank,
/// from rank 5 to 6 for White and 4 to 3 for Black. A promotion target
/// rules en passant out.
pub(crate) fn is_en_passant(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
) -> bool {
    if promotion.is_some() {
        return false;
    }
    let Some(mover) = position.piece_at(start) else {
        return false;
    };
    if !mover.is_pawn() || position.piece_at(end).is_some() {
        return false;
    }
    if start.file().abs_diff(end.file()) != 1 {
        return false;
    }
    let ranks_match = if mover.is_white() {
        start.rank() == 4 && end.rank() == 5
    } else {
        start.rank() == 3 && end.rank() == 2
    };
    if !ranks_match {
        return false;
    }
    match position.piece_at(Square::new(end.file(), start.rank())) {
        Some(victim) => victim.is_pawn() && !victim.is_same_color_as(mover),
        None => false,
    }
}

/// Whether moving the piece on `start` to `end` is short castling in the
/// structural sense: the king on its unmoved square heading for the g
/// file, the rook still in the h corner, and the squares between them
/// empty. Nothing here asks whether the squares are attacked. A
/// promotion target rules castling out.
pub(crate) fn is_short_castling(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
) -> bool {
    if promotion.is_some() {
        return false;
    }
    let Some(king) = position.piece_at(start) else {
        return false;
    };
    if !king.is_king() {
        return false;
    }
    let rank = home_rank(king.player());
    if start != Square::new(4, rank) || end != Square::new(6, rank) {
        return false;
    }
    position.piece_at(Square::new(7, rank)) == Some(Piece::new(king.player(), PieceKind::Rook))
        && position.piece_at(Square::new(5, rank)).is_none()
        && position.piece_at(Square::new(6, rank)).is_none()
}

/// The long-castling counterpart of [`is_short_castling`]: king to the c
/// file, rook in the a corner, b, c and d squares empty.
pub(crate) fn is_long_castling(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
) -> bool {
    if promotion.is_some() {
        return false;
    }
    let Some(king) = position.piece_at(start) else {
        return false;
    };
    if !king.is_king() {
        return false;
    }
    let rank = home_rank(king.player());
    if start != Square::new(4, rank) || end != Square::new(2, rank) {
        return false;
    }
    position.piece_at(Square::new(0, rank)) == Some(Piece::new(king.player(), PieceKind::Rook))
        && position.piece_at(Square::new(1, rank)).is_none()
        && position.piece_at(Square::new(2, rank)).is_none()
        && position.piece_at(Square::new(3, rank)).is_none()
}

/// The piece the move from `start` to `end` captures, if any: the pawn
/// passed by for en passant, otherwise whatever stands on the destination.
pub(crate) fn captured_piece(
    position: &Position,
    start: Square,
    end: Square,
    en_passant: bool,
) -> Option<Piece> {
    if en_passant {
        let mover = position.piece_at(start)?;
        Some(Piece::new(mover.player().opponent(), PieceKind::Pawn))
    } else {
        position.piece_at(end)
    }
}

/// The file of the double pawn push from `start` to `end`, or `None` if
/// the move is not one: a pawn on its home rank going two squares
/// straight ahead over an empty intermediate square.
pub(crate) fn double_pawn_push_file(
    position: &Position,
    start: Square,
    end: Square,
) -> Option<u8> {
    let mover = position.piece_at(start)?;
    if !mover.is_pawn() || start.file() != end.file() {
        return None;
    }
    let (home, target, intermediate) = if mover.is_white() { (1, 3, 2) } else { (6, 4, 5) };
    if start.rank() != home || end.rank() != target {
        return None;
    }
    if position.piece_at(Square::new(start.file(), intermediate)).is_some() {
        return None;
    }
    Some(start.file())
}

/// Builds a move in the given position, deriving its kind from the rule
/// predicates of `variant`. Fails only when the starting square is empty.
pub(crate) fn create_move(
    variant: &super::Variant,
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
    san: Option<&str>,
) -> Result<ChessMove, MoveFormatError> {
    let mover = position
        .piece_at(start)
        .ok_or(MoveFormatError::EmptyStartingSquare(start))?;

    let kind = if variant.is_short_castling(position, start, end, promotion) {
        MoveKind::ShortCastling
    } else if variant.is_long_castling(position, start, end, promotion) {
        MoveKind::LongCastling
    } else if variant.is_en_passant(position, start, end, promotion) {
        MoveKind::EnPassant {
            captured: Piece::new(mover.player().opponent(), PieceKind::Pawn),
        }
    } else {
        MoveKind::Normal {
            captured: variant.captured_piece(position, start, end, false),
            promotion,
            double_pawn_push_file: variant.double_pawn_push_file(position, start, end),
        }
    };

    Ok(ChessMove::new(
        start,
        end,
        mover.player(),
        kind,
        san.map(str::to_owned),
    ))
}

/// The short castling move of the player to move, if the structural
/// conditions currently hold.
pub(crate) fn create_short_castling(position: &Position) -> Result<ChessMove, MoveFormatError> {
    let player = position.current_player();
    let rank = home_rank(player);
    let start = Square::new(4, rank);
    let end = Square::new(6, rank);
    if !is_short_castling(position, start, end, None) {
        return Err(MoveFormatError::CastlingUnavailable);
    }
    Ok(ChessMove::new(
        start,
        end,
        player,
        MoveKind::ShortCastling,
        Some("O-O".to_owned()),
    ))
}

/// The long castling move of the player to move, if the structural
/// conditions currently hold.
pub(crate) fn create_long_castling(position: &Position) -> Result<ChessMove, MoveFormatError> {
    let player = position.current_player();
    let rank = home_rank(player);
    let start = Square::new(4, rank);
    let end = Square::new(2, rank);
    if !is_long_castling(position, start, end, None) {
        return Err(MoveFormatError::CastlingUnavailable);
    }
    Ok(ChessMove::new(
        start,
        end,
        player,
        MoveKind::LongCastling,
        Some("O-O-O".to_owned()),
    ))
}

/// Applies a move to the board: clear the origin, set the destination to
/// the mover (or the promotion target), remove the pawn captured en
/// passant, relocate the rook for castling, and give the opponent the
/// move. Application is as total as the predicates; with a degenerate
/// move the well-defined writes still happen and nothing faults.
pub(crate) fn make_chess_move(chess_move: &ChessMove, board: &mut Modifier<'_>) {
    let mover = board.piece_at(chess_move.start());
    board.set_piece_at(chess_move.start(), None);
    board.set_piece_at(chess_move.end(), chess_move.promotion_target().or(mover));

    if chess_move.is_en_passant() {
        board.set_piece_at(
            Square::new(chess_move.end().file(), chess_move.start().rank()),
            None,
        );
    } else if chess_move.is_castling() {
        let rank = chess_move.start().rank();
        let (rook_from, rook_to) = if chess_move.is_short_castling() {
            (7, 5)
        } else {
            (0, 3)
        };
        relocate(board, Square::new(rook_from, rank), Square::new(rook_to, rank));
    }

    board.set_current_player(board.current_player().opponent());
}

/// Moves whatever stands on `from` to `to`; does nothing if `from` is
/// empty.
pub(crate) fn relocate(board: &mut Modifier<'_>, from: Square, to: Square) {
    if let Some(piece) = board.piece_at(from) {
        board.set_piece_at(from, None);
        board.set_piece_at(to, Some(piece));
    }
}
