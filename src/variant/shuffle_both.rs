//! Shuffle both variant.
//!
//! Both sides get an independently shuffled back rank: rooks in the
//! corners, the king on the d or e file, bishops on opposite colors,
//! queen and knights wherever room remains. Because the king may start
//! on d1/d8, castling comes in two forms. With the king on the e file the
//! classic moves apply; with the king on the d file castling is reversed,
//! the short side pointing toward the a corner (king d1 to b1, rook a1 to
//! c1) and the long side toward the h corner (king d1 to f1, rook h1 to
//! e1).

use rand::Rng;

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::MoveFormatError;
use crate::piece::{Piece, PieceKind};
use crate::position::{Modifier, Position};
use crate::square::Square;

use super::chesslike::{self, home_rank, relocate};

/// A fresh random initial position in lexicographic form, White to move.
pub(crate) fn random_initial_lexigraphic() -> String {
    let mut rng = rand::rng();
    let mut board = ['-'; 64];

    for (index, piece) in [(0, 'r'), (7, 'r'), (56, 'R'), (63, 'R')] {
        board[index] = piece;
    }
    for index in 8..16 {
        board[index] = 'p';
    }
    for index in 48..56 {
        board[index] = 'P';
    }

    fill_back_rank(&mut rng, &mut board, 1, ['k', 'b', 'q', 'n']);
    fill_back_rank(&mut rng, &mut board, 57, ['K', 'B', 'Q', 'N']);
    board.iter().collect()
}

/// Fills the six slots between the rooks: king on the d or e file, one
/// bishop per square color, the queen anywhere, knights in the leftovers.
fn fill_back_rank<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut [char; 64],
    lo: usize,
    [king, bishop, queen, knight]: [char; 4],
) {
    board[lo + 2 + rng.random_range(0..2)] = king;
    place_in_random_slot(rng, board, lo, |index| index % 2 == 0, bishop);
    place_in_random_slot(rng, board, lo, |index| index % 2 == 1, bishop);
    place_in_random_slot(rng, board, lo, |_| true, queen);
    for index in lo..lo + 6 {
        if board[index] == '-' {
            board[index] = knight;
        }
    }
}

fn place_in_random_slot<R, F>(rng: &mut R, board: &mut [char; 64], lo: usize, eligible: F, piece: char)
where
    R: Rng + ?Sized,
    F: Fn(usize) -> bool,
{
    let slots: Vec<usize> = (lo..lo + 6)
        .filter(|&index| board[index] == '-' && eligible(index))
        .collect();
    board[slots[rng.random_range(0..slots.len())]] = piece;
}

/// Reversed short castling: the king on the d file heading for the b
/// file, the rook in the a corner, the b and c squares empty. A
/// promotion target rules castling out.
pub(crate) fn is_reversed_short_castling(
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
    if start != Square::new(3, rank) || end != Square::new(1, rank) {
        return false;
    }
    position.piece_at(Square::new(0, rank)) == Some(Piece::new(king.player(), PieceKind::Rook))
        && position.piece_at(Square::new(1, rank)).is_none()
        && position.piece_at(Square::new(2, rank)).is_none()
}

/// Reversed long castling: the king on the d file heading for the f
/// file, the rook in the h corner, the e, f and g squares empty.
pub(crate) fn is_reversed_long_castling(
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
    if start != Square::new(3, rank) || end != Square::new(5, rank) {
        return false;
    }
    position.piece_at(Square::new(7, rank)) == Some(Piece::new(king.player(), PieceKind::Rook))
        && position.piece_at(Square::new(4, rank)).is_none()
        && position.piece_at(Square::new(5, rank)).is_none()
        && position.piece_at(Square::new(6, rank)).is_none()
}

pub(crate) fn create_short_castling(position: &Position) -> Result<ChessMove, MoveFormatError> {
    let player = position.current_player();
    let rank = home_rank(player);
    let classic = (Square::new(4, rank), Square::new(6, rank));
    let reversed = (Square::new(3, rank), Square::new(1, rank));

    let (start, end) = if chesslike::is_short_castling(position, classic.0, classic.1, None) {
        classic
    } else if is_reversed_short_castling(position, reversed.0, reversed.1, None) {
        reversed
    } else {
        return Err(MoveFormatError::CastlingUnavailable);
    };
    Ok(ChessMove::new(
        start,
        end,
        player,
        MoveKind::ShortCastling,
        Some("O-O".to_owned()),
    ))
}

pub(crate) fn create_long_castling(position: &Position) -> Result<ChessMove, MoveFormatError> {
    let player = position.current_player();
    let rank = home_rank(player);
    let classic = (Square::new(4, rank), Square::new(2, rank));
    let reversed = (Square::new(3, rank), Square::new(5, rank));

    let (start, end) = if chesslike::is_long_castling(position, classic.0, classic.1, None) {
        classic
    } else if is_reversed_long_castling(position, reversed.0, reversed.1, None) {
        reversed
    } else {
        return Err(MoveFormatError::CastlingUnavailable);
    };
    Ok(ChessMove::new(
        start,
        end,
        player,
        MoveKind::LongCastling,
        Some("O-O-O".to_owned()),
    ))
}

/// Applies a castling move of either form. The king's starting file tells
/// the forms apart: e file means classic rook squares, d file means the
/// reversed ones.
pub(crate) fn apply_castling(chess_move: &ChessMove, board: &mut Modifier<'_>) {
    let start = chess_move.start();
    let rank = start.rank();
    let reversed = start.file() == 3;
    let (rook_from, rook_to) = match (chess_move.is_short_castling(), reversed) {
        (true, false) => (7, 5),
        (true, true) => (0, 2),
        (false, false) => (0, 3),
        (false, true) => (7, 4),
    };

    let king = board.piece_at(start);
    board.set_piece_at(start, None);
    board.set_piece_at(chess_move.end(), king);
    relocate(board, Square::new(rook_from, rank), Square::new(rook_to, rank));
    board.set_current_player(board.current_player().opponent());
}
