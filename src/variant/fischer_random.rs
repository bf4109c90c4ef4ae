//! Fischer random chess (chess960).
//!
//! The back rank is shuffled at setup time under three constraints: the
//! bishops stand on opposite colors, the king stands between the rooks,
//! and Black mirrors White. Castling keeps the classic destinations (the
//! king ends on the g or c file) but the king may start anywhere on its
//! home rank, so the rules here scan from the king toward the corner for
//! the rook instead of assuming the standard squares. A castling move may
//! also land on its own rook when the rook occupies the king's
//! destination square, as some servers transmit it. King moves that a
//! plain step could also produce (from the f file to g, or from the b or
//! d file to c) are not treated as castling unless they capture the own
//! rook, because nothing in the move distinguishes the two readings.

use rand::Rng;

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::MoveFormatError;
use crate::piece::{Piece, PieceKind};
use crate::player::Player;
use crate::position::{Modifier, Position};
use crate::square::Square;

use super::chesslike::{home_rank, relocate};

/// A fresh random initial position in FEN form.
pub(crate) fn random_initial_fen() -> String {
    let mut rng = rand::rng();
    let mut files: [Option<char>; 8] = [None; 8];

    // One bishop on a dark file, one on a light file.
    files[rng.random_range(0..4) * 2] = Some('B');
    files[rng.random_range(0..4) * 2 + 1] = Some('B');
    for piece in ['Q', 'N', 'N'] {
        place_in_random_gap(&mut rng, &mut files, piece);
    }
    // The three remaining gaps get rook, king, rook, which puts the king
    // between the rooks.
    let mut remaining = ['R', 'K', 'R'].into_iter();
    for slot in files.iter_mut() {
        if slot.is_none() {
            *slot = remaining.next();
        }
    }

    let white: String = files.iter().flatten().collect();
    let black = white.to_lowercase();
    format!("{black}/pppppppp/8/8/8/8/PPPPPPPP/{white} w KQkq - 0 1")
}

fn place_in_random_gap<R: Rng + ?Sized>(rng: &mut R, files: &mut [Option<char>; 8], piece: char) {
    let gaps = files.iter().filter(|slot| slot.is_none()).count();
    let mut skip = rng.random_range(0..gaps);
    for slot in files.iter_mut() {
        if slot.is_none() {
            if skip == 0 {
                *slot = Some(piece);
                return;
            }
            skip -= 1;
        }
    }
}

/// The square of the first piece on `king_square`'s rank in the given
/// file direction, provided that piece is a rook of `player`.
fn rook_towards(
    position: &Position,
    king_square: Square,
    player: Player,
    direction: i8,
) -> Option<Square> {
    let mut file = king_square.file() as i8 + direction;
    while (0..8).contains(&file) {
        let square = Square::new(file as u8, king_square.rank());
        if let Some(piece) = position.piece_at(square) {
            let is_own_rook = piece.is_rook() && piece.player() == player;
            return is_own_rook.then_some(square);
        }
        file += direction;
    }
    None
}

/// Short castling: the king on its home rank heading for the g file,
/// with an unobstructed own rook toward the h corner. A king starting on
/// the f file only castles by capturing the own rook on g, since the
/// plain step there looks identical.
pub(crate) fn is_short_castling(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
) -> bool {
    is_castling_towards(position, start, end, promotion, 1, 6, 5)
}

/// Long castling: as [`is_short_castling`], toward the a corner and the
/// c file. Starts on the b and d files are the ambiguous ones here: from
/// d the own-rook capture form still counts, from b (one step from c)
/// nothing does.
pub(crate) fn is_long_castling(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
) -> bool {
    if let Some(king) = position.piece_at(start) {
        if king.is_king() && start.file() == 1 && start.rank() == home_rank(king.player()) {
            return false;
        }
    }
    is_castling_towards(position, start, end, promotion, -1, 2, 3)
}

fn is_castling_towards(
    position: &Position,
    start: Square,
    end: Square,
    promotion: Option<Piece>,
    direction: i8,
    king_target_file: u8,
    ambiguous_start_file: u8,
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
    if start.rank() != rank {
        return false;
    }

    let own_rook = Piece::new(king.player(), PieceKind::Rook);
    let taken = position.piece_at(end);
    if taken.is_some() && taken != Some(own_rook) {
        return false;
    }
    if end != Square::new(king_target_file, rank) {
        return false;
    }
    // From this file a plain king step reaches the same destination;
    // only the own-rook capture form is unambiguously castling.
    if start.file() == ambiguous_start_file {
        return taken == Some(own_rook);
    }

    match rook_towards(position, start, king.player(), direction) {
        // An own rook on the destination square must be the castling
        // rook itself, not one the scan stopped at earlier.
        Some(rook_square) => !(taken == Some(own_rook) && end != rook_square),
        None => false,
    }
}

pub(crate) fn create_short_castling(position: &Position) -> Result<ChessMove, MoveFormatError> {
    create_castling(position, 6, MoveKind::ShortCastling, "O-O")
}

pub(crate) fn create_long_castling(position: &Position) -> Result<ChessMove, MoveFormatError> {
    create_castling(position, 2, MoveKind::LongCastling, "O-O-O")
}

fn create_castling(
    position: &Position,
    king_target_file: u8,
    kind: MoveKind,
    san: &str,
) -> Result<ChessMove, MoveFormatError> {
    let player = position.current_player();
    let rank = home_rank(player);
    let king = Piece::new(player, PieceKind::King);
    let start = (0..8)
        .map(|file| Square::new(file, rank))
        .find(|&square| position.piece_at(square) == Some(king))
        .ok_or(MoveFormatError::CastlingUnavailable)?;
    let end = Square::new(king_target_file, rank);

    let available = match kind {
        MoveKind::ShortCastling => is_short_castling(position, start, end, None),
        _ => is_long_castling(position, start, end, None),
    };
    if !available {
        return Err(MoveFormatError::CastlingUnavailable);
    }
    Ok(ChessMove::new(start, end, player, kind, Some(san.to_owned())))
}

/// Applies a castling move: find the rook on the castling side, then put
/// the king on the g or c file and the rook beside it. The move's end
/// square is ignored, so the king-takes-own-rook encoding lands on the
/// same squares as the plain one.
pub(crate) fn apply_castling(chess_move: &ChessMove, board: &mut Modifier<'_>) {
    let start = chess_move.start();
    let rank = start.rank();
    let (direction, king_file, rook_file) = if chess_move.is_short_castling() {
        (1, 6, 5)
    } else {
        (-1, 2, 3)
    };

    if let Some(king) = board.piece_at(start) {
        let rook_square = rook_towards(board.position(), start, king.player(), direction);
        board.set_piece_at(start, None);
        if let Some(rook_square) = rook_square {
            relocate(board, rook_square, Square::new(rook_file, rank));
        }
        board.set_piece_at(Square::new(king_file, rank), Some(king));
    }
    board.set_current_player(board.current_player().opponent());
}

#[cfg(test)]
mod tests {
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;
    use crate::variant::Variant;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square should parse")
    }

    fn position(fen: &str) -> Position {
        let mut position = Position::with_variant(Variant::FischerRandom)
            .expect("random initial position should be well formed");
        position.set_fen(fen).expect("test FEN should parse");
        position
    }

    #[test]
    fn random_setup_constraints_hold() {
        for _ in 0..50 {
            let fen = super::random_initial_fen();
            let ranks: Vec<&str> = fen.split(' ').next().expect("FEN has fields").split('/').collect();
            let white = ranks[7];
            let black = ranks[0];
            assert_eq!(white.to_lowercase(), black);
            assert_eq!(white.len(), 8);

            let bishops: Vec<usize> = white
                .char_indices()
                .filter(|&(_, c)| c == 'B')
                .map(|(i, _)| i)
                .collect();
            assert_eq!(bishops.len(), 2);
            assert_ne!(bishops[0] % 2, bishops[1] % 2, "bishops share a color in {white}");

            let rooks: Vec<usize> = white
                .char_indices()
                .filter(|&(_, c)| c == 'R')
                .map(|(i, _)| i)
                .collect();
            let king = white.find('K').expect("setup has a king");
            assert_eq!(rooks.len(), 2);
            assert!(rooks[0] < king && king < rooks[1], "king outside rooks in {white}");
        }
    }

    #[test]
    fn scan_based_short_castling() {
        // King on b1, rook on c1: short castling toward the h side.
        let pos = position("1kr5/8/8/8/8/8/8/1KR5 w - - 0 1");
        assert!(super::is_short_castling(&pos, sq("b1"), sq("g1"), None));
        // The destination must be the g file; the rook's square is not
        // an accepted encoding when the rook stands elsewhere.
        assert!(!super::is_short_castling(&pos, sq("b1"), sq("c1"), None));
        assert!(!super::is_long_castling(&pos, sq("b1"), sq("g1"), None));
        // A promotion target rules castling out.
        assert!(!super::is_short_castling(
            &pos,
            sq("b1"),
            sq("g1"),
            Some(Piece::WHITE_QUEEN)
        ));
    }

    #[test]
    fn an_intervening_piece_blocks_the_scan() {
        let pos = position("8/8/8/8/8/8/8/1KN3R1 w - - 0 1");
        assert!(!super::is_short_castling(&pos, sq("b1"), sq("g1"), None));
    }

    #[test]
    fn plain_king_step_to_g1_is_not_castling() {
        // King on f1, rook on h1: f1-g1 is an ordinary king move, not
        // short castling, and the rook stays where it is.
        let mut pos = position("5k2/8/8/8/8/8/8/5K1R w - - 0 1");
        assert!(!super::is_short_castling(&pos, sq("f1"), sq("g1"), None));
        let mv = Variant::FischerRandom
            .create_move(&pos, sq("f1"), sq("g1"), None, None)
            .expect("king move should be constructible");
        assert!(!mv.is_castling());
        pos.make_move(&mv);
        assert_eq!(pos.piece_at(sq("g1")), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at(sq("h1")), Some(Piece::WHITE_ROOK));
        assert_eq!(pos.piece_at(sq("f1")), None);
    }

    #[test]
    fn plain_king_step_to_c1_is_not_castling() {
        // King on b1, rook on a1: b1-c1 is an ordinary king move.
        let mut pos = position("5k2/8/8/8/8/8/8/RK6 w - - 0 1");
        assert!(!super::is_long_castling(&pos, sq("b1"), sq("c1"), None));
        let mv = Variant::FischerRandom
            .create_move(&pos, sq("b1"), sq("c1"), None, None)
            .expect("king move should be constructible");
        assert!(!mv.is_castling());
        pos.make_move(&mv);
        assert_eq!(pos.piece_at(sq("c1")), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at(sq("a1")), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn from_the_d_file_only_the_rook_capture_form_castles_long() {
        // King on d1, rook on c1: d1xc1 is castling.
        let capture = position("5k2/8/8/8/8/8/8/2RK4 w - - 0 1");
        assert!(super::is_long_castling(&capture, sq("d1"), sq("c1"), None));
        // King on d1, empty c1, rook on a1: d1-c1 stays a plain step.
        let step = position("5k2/8/8/8/8/8/8/R2K4 w - - 0 1");
        assert!(!super::is_long_castling(&step, sq("d1"), sq("c1"), None));
    }

    #[test]
    fn own_rook_on_the_destination_is_the_capture_encoding() {
        // King on b1, rook on g1: b1xg1 castles short.
        let pos = position("6k1/8/8/8/8/8/8/1K4R1 w - - 0 1");
        assert!(super::is_short_castling(&pos, sq("b1"), sq("g1"), None));
    }

    #[test]
    fn castling_application_normalizes_the_squares() {
        let mut pos = position("1kr5/8/8/8/8/8/8/1KR5 w - - 0 1");
        let mv = Variant::FischerRandom
            .create_move(&pos, sq("b1"), sq("g1"), None, None)
            .expect("castling move should be constructible");
        assert!(mv.is_short_castling());
        pos.make_move(&mv);
        assert_eq!(pos.piece_at(sq("g1")), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at(sq("f1")), Some(Piece::WHITE_ROOK));
        assert_eq!(pos.piece_at(sq("b1")), None);
        assert_eq!(pos.piece_at(sq("c1")), None);
    }

    #[test]
    fn castling_factory_finds_the_king() {
        let pos = position("1kr5/8/8/8/8/8/8/1KR5 w - - 0 1");
        let mv = Variant::FischerRandom
            .create_short_castling(&pos)
            .expect("short castling should be available");
        assert_eq!(mv.start(), sq("b1"));
        assert_eq!(mv.end(), sq("g1"));
        assert!(Variant::FischerRandom.create_long_castling(&pos).is_err());
    }
}
