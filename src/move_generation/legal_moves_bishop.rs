use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut Vec<Move>) {
    board.slide(bishop, &BISHOP_DIRECTIONS, out);
}
