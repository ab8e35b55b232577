//! Canonical rule constants for the fog-of-war variant.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Board-field character marking a square the observer cannot see.
pub const FOG_UNKNOWN_MARK: char = 'U';

/// Halfmove clock value at which the game is drawn.
pub const HALFMOVE_DRAW_LIMIT: u32 = 50;

/// Promotion choices, in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];
