//! Piece records stored in the board's arena.

use crate::game_state::chess_types::{piece_to_fen_char, Color, PieceKind};
use crate::game_state::position::Position;

/// Stable handle to a piece in a [`Board`](crate::game_state::board::Board) arena.
///
/// Ids are assigned when the board is built and never reused, so a captured
/// piece keeps its id after leaving the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

impl Piece {
    #[inline]
    pub fn fen_char(&self) -> char {
        piece_to_fen_char(self.color, self.kind)
    }
}
