use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::ROOK_DIRECTIONS;

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut Vec<Move>) {
    board.slide(rook, &ROOK_DIRECTIONS, out);
}
