//! Perft node counting over pseudo-legal moves.
//!
//! A move that captures a king or triggers the 50-move draw ends the game:
//! it counts as a node at depth 1 and contributes nothing at greater depths.

use crate::game_state::board::Board;
use crate::game_state::errors::BoardError;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.king_captures += rhs.king_captures;
    }

    fn count_leaf(&mut self, mv: &Move) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castling() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
        if mv.captures_king() {
            self.king_captures += 1;
        }
    }
}

pub fn perft(board: &Board, depth: u8) -> Result<PerftCounts, BoardError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in board.all_moves(board.side_to_move()) {
        if depth == 1 {
            total.count_leaf(&mv);
            continue;
        }

        let mut next = board.clone();
        if next.apply_move(&mv)?.is_over() {
            continue;
        }
        total.merge(perft(&next, depth - 1)?);
    }

    Ok(total)
}

/// Per-root-move node counts, sorted by long algebraic move text.
pub fn perft_divide(board: &Board, depth: u8) -> Result<Vec<(String, usize)>, BoardError> {
    let mut out = Vec::new();
    for mv in board.all_moves(board.side_to_move()) {
        let nodes = if depth <= 1 {
            1
        } else {
            let mut next = board.clone();
            if next.apply_move(&mv)?.is_over() {
                0
            } else {
                perft(&next, depth - 1)?.nodes
            }
        };
        out.push((mv.to_long_algebraic(), nodes));
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::board::Board;

    #[test]
    fn starting_position_perft() {
        let board = Board::new_game();
        assert_eq!(perft(&board, 0).expect("perft should run").nodes, 1);
        assert_eq!(perft(&board, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&board, 2).expect("perft should run").nodes, 400);
        let depth3 = perft(&board, 3).expect("perft should run");
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.castles, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::new_game();
        let divide = perft_divide(&board, 2).expect("divide should run");
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }

    #[test]
    fn castling_and_promotion_counted_at_leaves() {
        let board = Board::from_fen("4k3/1P6/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let counts = perft(&board, 1).expect("perft should run");
        assert_eq!(counts.castles, 2);
        assert_eq!(counts.promotions, 4);
    }

    #[test]
    fn both_rooks_and_both_castles_at_depth_one() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let counts = perft(&board, 1).expect("perft should run");
        assert_eq!(counts.nodes, 26);
        assert_eq!(counts.castles, 2);
        assert_eq!(counts.captures, 2);
    }

    #[test]
    fn king_capture_is_counted_and_not_expanded() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").expect("FEN should parse");
        let counts = perft(&board, 1).expect("perft should run");
        assert_eq!(counts.king_captures, 1);
    }

    #[test]
    fn divide_matches_perft_when_a_king_can_be_taken() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").expect("FEN should parse");
        for depth in 1..=3 {
            let divide = perft_divide(&board, depth).expect("divide should run");
            let total = perft(&board, depth).expect("perft should run").nodes;
            assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<usize>(), total);
        }

        let divide = perft_divide(&board, 2).expect("divide should run");
        let king_capture = divide
            .iter()
            .find(|(text, _)| text == "e1e8")
            .expect("rook takes king on e8");
        assert_eq!(king_capture.1, 0);
    }
}
