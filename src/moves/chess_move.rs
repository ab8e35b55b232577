//! Generated move values.
//!
//! A `Move` carries snapshots (ids and positions), never references into the
//! board, so applying one move cannot disturb any other outstanding `Move`.
//! The board rejects a move whose `revision` no longer matches its own.

use std::sync::Arc;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece::PieceId;
use crate::game_state::position::Position;

/// Snapshot of the piece a move removes from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedPiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub position: Position,
}

/// Rook relocation carried by a castling king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRook {
    pub id: PieceId,
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub from: Position,
    pub to: Position,
    pub captured: Option<CapturedPiece>,
    pub promotion: Option<PieceKind>,
    pub castling_rook: Option<CastlingRook>,
    /// FEN of the board that generated this move. Provenance only.
    pub fen: Arc<str>,
    pub revision: u64,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Capture whose victim does not stand on the destination square.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some_and(|captured| captured.position != self.to)
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn captures_king(&self) -> bool {
        self.captured.is_some_and(|captured| captured.kind == PieceKind::King)
    }

    /// Long algebraic form, e.g. `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(promotion) = self.promotion {
            out.push(promotion.fen_char());
        }
        out
    }
}
