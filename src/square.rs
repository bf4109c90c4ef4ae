//! Board coordinates.
//!
//! A [`Square`] is a plain (file, rank) value in `[0,7] x [0,7]`. Equal
//! coordinates compare equal; no interning pool is needed for that to hold.
//! Text form is the usual two-character chess notation (`"e4"`), and
//! `parse` / `to_string` round-trip exactly.

use std::fmt;
use std::str::FromStr;

use crate::errors::SquareFormatError;

/// A location on a chess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Returns the square with the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `file` or `rank` is outside `[0,7]`.
    pub fn new(file: u8, rank: u8) -> Square {
        assert!(
            file < 8 && rank < 8,
            "file and rank must be in the range [0-7] (file:{file} rank:{rank})"
        );
        Square { file, rank }
    }

    /// Returns the square with the given coordinates, or `None` if either
    /// coordinate is outside `[0,7]`.
    #[inline]
    pub fn try_new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// The file of this square, in `[0,7]`.
    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    /// The rank of this square, in `[0,7]`.
    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// The file as a character in `['a'-'h']`.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file)
    }

    /// The rank as a character in `['1'-'8']`.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank)
    }
}

impl FromStr for Square {
    type Err = SquareFormatError;

    /// Parses exactly the two-character form `[a-h][1-8]`.
    fn from_str(s: &str) -> Result<Square, SquareFormatError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareFormatError(s.to_owned()));
        }
        if !(b'a'..=b'h').contains(&bytes[0]) || !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(SquareFormatError(s.to_owned()));
        }
        Ok(Square {
            file: bytes[0] - b'a',
            rank: bytes[1] - b'1',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
