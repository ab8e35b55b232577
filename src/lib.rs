//! Crate root module declarations for the fog-of-war chess rules engine.
//!
//! The board model and its rule constants live in `game_state`, generated
//! move values in `moves`, pseudo-legal generation and move application in
//! `move_generation`, sight sets in `visibility`, and the FEN/tensor codecs
//! plus rendering and random-play helpers in `utils`.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod errors;
    pub mod piece;
    pub mod position;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod visibility {
    pub mod sight;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
    pub mod tensor;
}

pub use game_state::board::Board;
pub use game_state::chess_types::{Color, Outcome, PieceKind};
pub use game_state::errors::{BoardError, FenError};
pub use game_state::piece::{Piece, PieceId};
pub use game_state::position::Position;
pub use move_generation::legal_move_generator::LegalMoves;
pub use moves::chess_move::Move;
pub use utils::tensor::BoardTensor;
pub use visibility::sight::SightSet;
