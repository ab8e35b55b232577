//! Pseudo-legal move generation.
//!
//! "Legal" here means legal by piece movement rules only: the variant has no
//! notion of check, so no generated move is ever filtered for king safety.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece::{Piece, PieceId};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Moves per piece. Pieces without moves have no entry.
pub type LegalMoves = BTreeMap<PieceId, Vec<Move>>;

impl Board {
    pub fn legal_moves(&self, color: Color) -> LegalMoves {
        let mut legal = LegalMoves::new();
        for piece in self.pieces_of(color) {
            let moves = self.moves_for_piece(piece);
            if !moves.is_empty() {
                legal.insert(piece.id, moves);
            }
        }
        legal
    }

    /// Flattened [`Board::legal_moves`], in piece order.
    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        self.legal_moves(color).into_values().flatten().collect()
    }

    pub fn moves_for_piece(&self, piece: &Piece) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(self, piece, &mut out),
            PieceKind::Knight => generate_knight_moves(self, piece, &mut out),
            PieceKind::Bishop => generate_bishop_moves(self, piece, &mut out),
            PieceKind::Rook => generate_rook_moves(self, piece, &mut out),
            PieceKind::Queen => generate_queen_moves(self, piece, &mut out),
            PieceKind::King => generate_king_moves(self, piece, &mut out),
        }
        out
    }
}
