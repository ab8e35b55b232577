//! Sight sets for fog of war.
//!
//! A color sees the squares it occupies plus every destination of its
//! generated moves. Squares behind a blocker are not seen. Both fog encoders
//! (text and tensor) read the set from [`Board::sight`], so they always agree.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;

/// Set of squares as a 64-bit mask, bit 0 = a1, bit 63 = h8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SightSet(u64);

impl SightSet {
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Adds `position`; off-board positions are ignored.
    #[inline]
    pub fn insert(&mut self, position: Position) {
        if let Some(index) = position.square_index() {
            self.0 |= 1u64 << index;
        }
    }

    #[inline]
    pub fn contains(self, position: Position) -> bool {
        position
            .square_index()
            .is_some_and(|index| self.0 & (1u64 << index) != 0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Squares in a1, b1, ..., h8 order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Position::from_square_index(index))
        })
    }
}

impl Board {
    pub fn sight(&self, color: Color) -> SightSet {
        let mut sight = SightSet::default();
        for piece in self.pieces_of(color) {
            sight.insert(piece.position);
        }
        for moves in self.legal_moves(color).values() {
            for mv in moves {
                sight.insert(mv.to);
            }
        }
        sight
    }
}
