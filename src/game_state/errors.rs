//! Error types for FEN parsing, board construction, and move application.
//!
//! `FenError` covers the text tokenizer only. `BoardError` is what board-level
//! APIs return; it wraps `FenError` so `?` works across the parse boundary.

use crate::game_state::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} of board layout spans {width} files instead of 8")]
    RankWidth { rank: usize, width: usize },

    #[error("invalid empty-square count '{0}'")]
    InvalidEmptyRun(char),

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastling(char),

    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid {field}: {value}")]
    InvalidCounter { field: &'static str, value: String },

    #[error("stale move from {from} to {to}: generated at revision {move_revision}, board is at {board_revision}")]
    StaleMove {
        from: Position,
        to: Position,
        move_revision: u64,
        board_revision: u64,
    },
}
