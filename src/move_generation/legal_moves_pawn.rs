use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::StepRules;
use crate::moves::chess_move::{CapturedPiece, Move};

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, out: &mut Vec<Move>) {
    let color = pawn.color;
    let forward = color.forward();
    let promotion_rank = color.promotion_rank();

    // Double advance only through an empty first square.
    let one_step = pawn.position.offset(forward, 0);
    let advance = StepRules::QUIET_ONLY.promoting(one_step.rank == promotion_rank);
    let blocked = board.try_step(pawn, one_step, advance, out);
    if !blocked && pawn.position.rank == color.pawn_start_rank() {
        let two_step = pawn.position.offset(2 * forward, 0);
        let advance = StepRules::QUIET_ONLY.promoting(two_step.rank == promotion_rank);
        board.try_step(pawn, two_step, advance, out);
    }

    for d_file in [1, -1] {
        let target = pawn.position.offset(forward, d_file);
        let capture = StepRules::CAPTURE_ONLY.promoting(target.rank == promotion_rank);
        board.try_step(pawn, target, capture, out);
    }

    generate_en_passant(board, pawn, out);
}

fn generate_en_passant(board: &Board, pawn: &Piece, out: &mut Vec<Move>) {
    let Some(target) = board.en_passant() else {
        return;
    };

    let (capture_rank, target_rank) = match pawn.color {
        Color::White => (5, 6),
        Color::Black => (4, 3),
    };
    if pawn.position.rank != capture_rank
        || target.rank != target_rank
        || (pawn.position.file - target.file).abs() != 1
    {
        return;
    }

    // The victim stands beside the mover, not on the target square.
    let victim_square = Position::new(capture_rank, target.file);
    let Some(victim) = board.piece_at(victim_square) else {
        return;
    };
    if victim.color == pawn.color {
        return;
    }

    let captured = CapturedPiece {
        id: victim.id,
        kind: victim.kind,
        position: victim.position,
    };
    out.push(board.build_move(pawn, target, Some(captured), None, None));
}
