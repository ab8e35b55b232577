//! Random-move driver.
//!
//! Plays uniformly random pseudo-legal moves for whichever side is to move.
//! Useful as a baseline opponent and for exercising the rules engine over
//! many positions.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Outcome;
use crate::game_state::errors::BoardError;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutResult {
    pub outcome: Outcome,
    pub plies: usize,
}

/// Picks a random move for the side to move, or `None` if it has none.
pub fn choose_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    board.all_moves(board.side_to_move()).choose(rng).cloned()
}

/// Plays random moves until the game ends, the side to move has no moves,
/// or `max_plies` moves have been made. `after_move` sees the board after
/// every applied move.
pub fn play_random_game<R, F>(
    board: &mut Board,
    rng: &mut R,
    max_plies: usize,
    mut after_move: F,
) -> Result<PlayoutResult, BoardError>
where
    R: Rng + ?Sized,
    F: FnMut(&Board, &Move, Outcome),
{
    let mut plies = 0;
    while plies < max_plies {
        let Some(mv) = choose_random_move(board, rng) else {
            break;
        };
        let outcome = board.apply_move(&mv)?;
        plies += 1;
        after_move(board, &mv, outcome);
        if outcome.is_over() {
            return Ok(PlayoutResult { outcome, plies });
        }
    }

    Ok(PlayoutResult {
        outcome: Outcome::Ongoing,
        plies,
    })
}
