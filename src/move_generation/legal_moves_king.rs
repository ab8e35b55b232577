use crate::game_state::board::Board;
use crate::game_state::chess_types::CastleSide;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::StepRules;
use crate::moves::chess_move::{CastlingRook, Move};
use crate::moves::move_offsets::KING_OFFSETS;

pub fn generate_king_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    for (d_rank, d_file) in KING_OFFSETS {
        let target = king.position.offset(d_rank, d_file);
        board.try_step(king, target, StepRules::MOVE_OR_CAPTURE, out);
    }

    generate_castling_moves(board, king, out);
}

/// Emits castling moves without any attacked-square checks.
fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !board.has_castling_right(king.color, side) {
            continue;
        }

        let corner = Position::new(king.position.rank, side.corner_file());
        let Some(rook) = board.piece_at(corner) else {
            continue;
        };
        if rook.color != king.color || rook.id == king.id {
            continue;
        }

        // The king's two-file hop and the rook's landing square must both lie
        // strictly between king and corner.
        let direction = side.direction();
        if (corner.file - king.position.file) * direction < 3 {
            continue;
        }

        let path_clear = (1..(corner.file - king.position.file).abs())
            .map(|step| king.position.offset(0, step * direction))
            .all(|square| board.piece_at(square).is_none());
        if !path_clear {
            continue;
        }

        let destination = king.position.offset(0, 2 * direction);
        let castling_rook = CastlingRook {
            id: rook.id,
            from: corner,
            to: destination.offset(0, -direction),
        };
        out.push(board.build_move(king, destination, None, None, Some(castling_rook)));
    }
}
