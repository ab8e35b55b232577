//! Stepping and ray-casting primitives shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::chess_move::{CapturedPiece, CastlingRook, Move};

/// What a single step onto a target square is allowed to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRules {
    pub can_capture: bool,
    pub can_promote: bool,
    pub must_capture: bool,
}

impl StepRules {
    /// Knight, king, and slider steps.
    pub const MOVE_OR_CAPTURE: Self = Self {
        can_capture: true,
        can_promote: false,
        must_capture: false,
    };

    /// Pawn advances.
    pub const QUIET_ONLY: Self = Self {
        can_capture: false,
        can_promote: false,
        must_capture: false,
    };

    /// Pawn diagonals.
    pub const CAPTURE_ONLY: Self = Self {
        can_capture: true,
        can_promote: false,
        must_capture: true,
    };

    #[inline]
    pub const fn promoting(self, can_promote: bool) -> Self {
        Self {
            can_promote,
            ..self
        }
    }
}

impl Board {
    /// Tries to move `piece` onto `target`, pushing any resulting moves.
    ///
    /// Returns `true` when the target blocks further travel along a ray: it
    /// is off the board or occupied (whether or not a capture was added).
    pub fn try_step(&self, piece: &Piece, target: Position, rules: StepRules, out: &mut Vec<Move>) -> bool {
        if !target.valid() {
            return true;
        }

        let Some(occupant) = self.piece_at(target) else {
            if !rules.must_capture {
                self.push_with_promotions(piece, target, None, rules.can_promote, out);
            }
            return false;
        };

        if occupant.color != piece.color && rules.can_capture {
            let captured = CapturedPiece {
                id: occupant.id,
                kind: occupant.kind,
                position: occupant.position,
            };
            self.push_with_promotions(piece, target, Some(captured), rules.can_promote, out);
        }
        true
    }

    /// Walks each direction outward from `piece` until a step is blocked.
    pub(crate) fn slide(&self, piece: &Piece, directions: &[(i8, i8)], out: &mut Vec<Move>) {
        for &(d_rank, d_file) in directions {
            let mut target = piece.position;
            for _ in 0..7 {
                target = target.offset(d_rank, d_file);
                if self.try_step(piece, target, StepRules::MOVE_OR_CAPTURE, out) {
                    break;
                }
            }
        }
    }

    fn push_with_promotions(
        &self,
        piece: &Piece,
        to: Position,
        captured: Option<CapturedPiece>,
        can_promote: bool,
        out: &mut Vec<Move>,
    ) {
        if can_promote {
            for promotion in PROMOTION_KINDS {
                out.push(self.build_move(piece, to, captured, Some(promotion), None));
            }
        } else {
            out.push(self.build_move(piece, to, captured, None, None));
        }
    }

    #[inline]
    pub(crate) fn build_move(
        &self,
        piece: &Piece,
        to: Position,
        captured: Option<CapturedPiece>,
        promotion: Option<PieceKind>,
        castling_rook: Option<CastlingRook>,
    ) -> Move {
        Move {
            piece: piece.id,
            color: piece.color,
            kind: piece.kind,
            from: piece.position,
            to,
            captured,
            promotion,
            castling_rook,
            fen: self.fen.clone(),
            revision: self.revision,
        }
    }
}
