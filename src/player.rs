//! The two sides of a chess game.

use std::fmt;

/// One of the two players, identified by piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Returns the other player. `p.opponent().opponent() == p`.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Player::White)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Player::Black)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Player::White.opponent().opponent(), Player::White);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn color_queries() {
        assert!(Player::White.is_white());
        assert!(!Player::White.is_black());
        assert!(Player::Black.is_black());
    }
}
