//! Board coordinates.
//!
//! A `Position` is a 1-based (rank, file) pair. Move generation freely builds
//! off-board positions with [`Position::offset`]; only positions passing
//! [`Position::valid`] are ever used as board keys.

use std::fmt;

use crate::game_state::errors::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub rank: i8,
    pub file: i8,
}

impl Position {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn valid(self) -> bool {
        self.rank >= 1 && self.rank <= 8 && self.file >= 1 && self.file <= 8
    }

    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Self {
            rank: self.rank + d_rank,
            file: self.file + d_file,
        }
    }

    /// Square index `0 == a1`, `7 == h1`, `63 == h8`. `None` when off the board.
    #[inline]
    pub const fn square_index(self) -> Option<usize> {
        if !self.valid() {
            return None;
        }
        Some(((self.rank - 1) as usize) * 8 + (self.file - 1) as usize)
    }

    /// Inverse of [`Position::square_index`].
    #[inline]
    pub const fn from_square_index(index: usize) -> Self {
        Self {
            rank: (index / 8) as i8 + 1,
            file: (index % 8) as i8 + 1,
        }
    }

    /// Two-character algebraic name, e.g. `e4`. Off-board positions render as `-`.
    pub fn to_algebraic(self) -> String {
        if !self.valid() {
            return "-".to_owned();
        }
        let file_char = char::from(b'a' + (self.file - 1) as u8);
        let rank_char = char::from(b'0' + self.rank as u8);
        format!("{file_char}{rank_char}")
    }

    pub fn from_algebraic(square: &str) -> Result<Self, BoardError> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::InvalidSquare(square.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(BoardError::InvalidSquare(square.to_owned()));
        }

        Ok(Self {
            rank: (rank - b'0') as i8,
            file: (file - b'a') as i8 + 1,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}
