//! The board state of a chesslike game.
//!
//! A [`Position`] owns an 8x8 board of optional pieces, the player to move,
//! and the [`Variant`](crate::variant::Variant) whose rules govern it. Every
//! mutation through the public surface ends with exactly one change
//! notification to the registered listeners; [`Position::make_move`]
//! additionally fires one move notification first, so an observer always
//! sees a fully applied move.
//!
//! Variant rule code mutates the board through a [`Modifier`], which applies
//! raw edits without firing events. A `Modifier` can only be created inside
//! this crate, so outside callers cannot bypass the notification contract.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_move::ChessMove;
use crate::errors::{PieceFormatError, PositionFormatError};
use crate::piece::Piece;
use crate::player::Player;
use crate::square::Square;
use crate::variant::Variant;

type ChangeListener = Box<dyn FnMut(&Position)>;
type MoveListener = Box<dyn FnMut(&Position, &ChessMove)>;

/// Handle returned by the listener registration methods, used to
/// deregister the listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// The state of a chesslike game: board, player to move, and variant.
pub struct Position {
    variant: Variant,
    board: [[Option<Piece>; 8]; 8],
    current_player: Player,
    // The last FEN this position was set from, invalidated by any later edit.
    fen: Option<String>,
    next_listener_id: u64,
    change_listeners: RefCell<Vec<(ListenerId, ChangeListener)>>,
    move_listeners: RefCell<Vec<(ListenerId, MoveListener)>>,
}

impl Position {
    /// The initial position of standard chess.
    pub fn new() -> Position {
        Position::with_variant(Variant::Chess)
            .expect("the standard initial position should be well formed")
    }

    /// The initial position of the given variant.
    pub fn with_variant(variant: Variant) -> Result<Position, PositionFormatError> {
        let mut position = Position {
            variant,
            board: [[None; 8]; 8],
            current_player: Player::White,
            fen: None,
            next_listener_id: 0,
            change_listeners: RefCell::new(Vec::new()),
            move_listeners: RefCell::new(Vec::new()),
        };
        position.init()?;
        Ok(position)
    }

    /// The variant whose rules govern this position.
    #[inline]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// The player to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.file() as usize][square.rank() as usize]
    }

    /// Puts `piece` on `square` (or empties it) and notifies listeners.
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.file() as usize][square.rank() as usize] = piece;
        self.fen = None;
        self.fire_state_changed();
    }

    /// Sets the player to move and notifies listeners.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
        self.fen = None;
        self.fire_state_changed();
    }

    /// Resets this position to the variant's initial state.
    pub fn init(&mut self) -> Result<(), PositionFormatError> {
        let variant = self.variant.clone();
        variant.init(self)
    }

    /// Empties the board, gives White the move, and notifies listeners.
    pub fn clear(&mut self) {
        self.board = [[None; 8]; 8];
        self.current_player = Player::White;
        self.fen = None;
        self.fire_state_changed();
    }

    /// Sets the position from a FEN string.
    ///
    /// Only the board field and the active color field are interpreted;
    /// the remaining four fields must be present but their content is
    /// ignored. On error the position is left untouched. On success the
    /// given string is retained verbatim and returned by [`Position::fen`]
    /// until the position is next modified.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), PositionFormatError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(PositionFormatError::WrongFieldCount(fields.len()));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(PositionFormatError::WrongRankCount(ranks.len()));
        }

        let mut board = [[None; 8]; 8];
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    if file >= 8 {
                        return Err(PositionFormatError::RankTooLong(rank));
                    }
                    match self.variant.parse_piece(c)? {
                        Some(piece) => board[file][rank] = Some(piece),
                        None => {
                            return Err(PositionFormatError::BadPiece(PieceFormatError(
                                c.to_string(),
                            )))
                        }
                    }
                    file += 1;
                }
            }
            if file > 8 {
                return Err(PositionFormatError::RankTooLong(rank));
            }
            if file < 8 {
                return Err(PositionFormatError::RankTooShort(rank));
            }
        }

        let current_player = match fields[1] {
            "w" => Player::White,
            "b" => Player::Black,
            other => return Err(PositionFormatError::BadSideToMove(other.to_owned())),
        };

        self.board = board;
        self.current_player = current_player;
        self.fen = Some(fen.to_owned());
        self.fire_state_changed();
        Ok(())
    }

    /// The FEN string this position was last set from, if the position has
    /// not been modified since.
    pub fn fen(&self) -> Option<&str> {
        self.fen.as_deref()
    }

    /// Sets the position from a lexicographic board string: 64 characters
    /// in rank 8 to rank 1, file a to file h order, each either a piece
    /// code or `-` for an empty square. Characters beyond the 64th are
    /// ignored. White gets the move.
    pub fn set_lexigraphic(&mut self, text: &str) -> Result<(), PositionFormatError> {
        let chars: Vec<char> = text.chars().take(64).collect();
        if chars.len() < 64 {
            return Err(PositionFormatError::BoardStringTooShort);
        }

        let mut board = [[None; 8]; 8];
        for (i, &c) in chars.iter().enumerate() {
            let file = i % 8;
            let rank = 7 - i / 8;
            board[file][rank] = self.variant.parse_piece(c)?;
        }

        self.board = board;
        self.current_player = Player::White;
        self.fen = None;
        self.fire_state_changed();
        Ok(())
    }

    /// The 64-character lexicographic form of the board, the inverse of
    /// [`Position::set_lexigraphic`].
    pub fn lexigraphic(&self) -> String {
        let mut s = String::with_capacity(64);
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.board[file][rank] {
                    Some(piece) => s.push_str(&self.variant.piece_to_string(piece)),
                    None => s.push('-'),
                }
            }
        }
        s
    }

    /// Applies the given move by the rules of this position's variant,
    /// then fires one move notification followed by one change
    /// notification.
    pub fn make_move(&mut self, chess_move: &ChessMove) {
        let variant = self.variant.clone();
        {
            let mut modifier = Modifier::new(self);
            variant.make_move(chess_move, &mut modifier);
        }
        self.fire_move_made(chess_move);
        self.fire_state_changed();
    }

    /// Copies the board, player to move, and FEN of `other` into this
    /// position and notifies listeners.
    ///
    /// # Panics
    ///
    /// Panics if the two positions belong to different variants.
    pub fn copy_from(&mut self, other: &Position) {
        assert!(
            self.variant == other.variant,
            "cannot copy a {} position into a {} position",
            other.variant.name(),
            self.variant.name()
        );
        self.board = other.board;
        self.current_player = other.current_player;
        self.fen = other.fen.clone();
        self.fire_state_changed();
    }

    /// Registers a callback invoked after every change to this position.
    pub fn add_change_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Position) + 'static,
    {
        let id = self.allocate_listener_id();
        self.change_listeners
            .get_mut()
            .push((id, Box::new(listener)));
        id
    }

    /// Deregisters a change listener. Returns whether it was registered.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        let listeners = self.change_listeners.get_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Registers a callback invoked after every move made on this
    /// position, before the corresponding change notification.
    pub fn add_move_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Position, &ChessMove) + 'static,
    {
        let id = self.allocate_listener_id();
        self.move_listeners.get_mut().push((id, Box::new(listener)));
        id
    }

    /// Deregisters a move listener. Returns whether it was registered.
    pub fn remove_move_listener(&mut self, id: ListenerId) -> bool {
        let listeners = self.move_listeners.get_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    fn allocate_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        id
    }

    fn fire_state_changed(&self) {
        let mut listeners = self.change_listeners.borrow_mut();
        for (_, listener) in listeners.iter_mut() {
            listener(self);
        }
    }

    fn fire_move_made(&self, chess_move: &ChessMove) {
        let mut listeners = self.move_listeners.borrow_mut();
        for (_, listener) in listeners.iter_mut() {
            listener(self, chess_move);
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl Clone for Position {
    /// Clones the game state. Listeners are not carried over; the clone
    /// starts with an empty registry.
    fn clone(&self) -> Position {
        Position {
            variant: self.variant.clone(),
            board: self.board,
            current_player: self.current_player,
            fen: self.fen.clone(),
            next_listener_id: 0,
            change_listeners: RefCell::new(Vec::new()),
            move_listeners: RefCell::new(Vec::new()),
        }
    }
}

impl PartialEq for Position {
    /// Game-state equality: variant, player to move, and board. Listener
    /// registries and the FEN cache do not participate.
    fn eq(&self, other: &Position) -> bool {
        self.variant == other.variant
            && self.current_player == other.current_player
            && self.board == other.board
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant.hash(state);
        self.current_player.hash(state);
        self.board.hash(state);
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("variant", &self.variant.name())
            .field("current_player", &self.current_player)
            .field("board", &self.lexigraphic())
            .finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to move in {}", self.current_player, self.lexigraphic())
    }
}

/// A raw-edit capability on a [`Position`], handed by the position to its
/// variant's rule code. Edits through a `Modifier` fire no notifications;
/// the position fires them once the whole move has been applied.
pub struct Modifier<'a> {
    position: &'a mut Position,
}

impl<'a> Modifier<'a> {
    pub(crate) fn new(position: &'a mut Position) -> Modifier<'a> {
        Modifier { position }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        self.position.board[square.file() as usize][square.rank() as usize] = piece;
        self.position.fen = None;
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.position.current_player
    }

    #[inline]
    pub fn set_current_player(&mut self, player: Player) {
        self.position.current_player = player;
        self.position.fen = None;
    }

    #[inline]
    pub(crate) fn position(&self) -> &Position {
        self.position
    }
}
