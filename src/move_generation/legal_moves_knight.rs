use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::StepRules;
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut Vec<Move>) {
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        let target = knight.position.offset(d_rank, d_file);
        board.try_step(knight, target, StepRules::MOVE_OR_CAPTURE, out);
    }
}
