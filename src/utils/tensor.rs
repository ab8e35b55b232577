//! Fixed-size boolean tensor encoding of a board.
//!
//! Layout is `[rank_index][file_index][channel]` with `rank_index 0 == rank 1`
//! and `file_index 0 == file a`. Channels:
//!
//! | channel | full encoding                          | fog encoding                  |
//! |---------|----------------------------------------|-------------------------------|
//! | 0..=3   | castling rights K, Q, k, q (broadcast) | same                          |
//! | 4       | white to move (broadcast)              | same                          |
//! | 5       | halfmove clock one-hot (cell `clock`)  | observer's sight mask         |
//! | 6       | all ones                               | same                          |
//! | 7..=18  | `7 + color * 6 + kind` occupancy       | occupancy inside sight only   |
//! | 19      | repetition marker, always zero         | same                          |
//!
//! An en-passant target is marked by placing the vulnerable pawn on the far
//! rank: a white pawn on rank index 0 for a target on rank 3, a black pawn on
//! rank index 7 for a target on rank 6. The fog encoding only marks targets
//! inside the sight set.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::visibility::sight::SightSet;

pub const TENSOR_CHANNELS: usize = 20;

pub const CHANNEL_WHITE_KINGSIDE: usize = 0;
pub const CHANNEL_WHITE_QUEENSIDE: usize = 1;
pub const CHANNEL_BLACK_KINGSIDE: usize = 2;
pub const CHANNEL_BLACK_QUEENSIDE: usize = 3;
pub const CHANNEL_SIDE_TO_MOVE: usize = 4;
/// Halfmove clock in the full encoding, sight mask in the fog encoding.
pub const CHANNEL_CLOCK_OR_SIGHT: usize = 5;
pub const CHANNEL_ONES: usize = 6;
pub const CHANNEL_PIECES_START: usize = 7;
pub const CHANNEL_REPETITION: usize = 19;

/// Largest halfmove clock the one-hot plane can hold.
pub const MAX_ENCODED_HALFMOVE_CLOCK: u32 = 63;

const CASTLING_CHANNELS: [(CastlingRights, usize); 4] = [
    (CASTLE_WHITE_KINGSIDE, CHANNEL_WHITE_KINGSIDE),
    (CASTLE_WHITE_QUEENSIDE, CHANNEL_WHITE_QUEENSIDE),
    (CASTLE_BLACK_KINGSIDE, CHANNEL_BLACK_KINGSIDE),
    (CASTLE_BLACK_QUEENSIDE, CHANNEL_BLACK_QUEENSIDE),
];

/// Occupancy channel for a colored piece.
#[inline]
pub const fn piece_channel(color: Color, kind: PieceKind) -> usize {
    CHANNEL_PIECES_START + color.index() * 6 + kind.index()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTensor {
    cells: [[[bool; TENSOR_CHANNELS]; 8]; 8],
}

impl Default for BoardTensor {
    fn default() -> Self {
        Self::zeros()
    }
}

impl BoardTensor {
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            cells: [[[false; TENSOR_CHANNELS]; 8]; 8],
        }
    }

    #[inline]
    pub fn get(&self, rank_index: usize, file_index: usize, channel: usize) -> bool {
        self.cells[rank_index][file_index][channel]
    }

    #[inline]
    pub fn set(&mut self, rank_index: usize, file_index: usize, channel: usize, value: bool) {
        self.cells[rank_index][file_index][channel] = value;
    }

    pub fn fill_plane(&mut self, channel: usize) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell[channel] = true;
            }
        }
    }

    pub fn plane(&self, channel: usize) -> [[bool; 8]; 8] {
        let mut out = [[false; 8]; 8];
        for (rank_index, row) in self.cells.iter().enumerate() {
            for (file_index, cell) in row.iter().enumerate() {
                out[rank_index][file_index] = cell[channel];
            }
        }
        out
    }

    pub fn plane_count(&self, channel: usize) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell[channel])
            .count()
    }

    #[inline]
    pub fn plane_any(&self, channel: usize) -> bool {
        self.cells.iter().flatten().any(|cell| cell[channel])
    }

    /// Row-major `[rank][file][channel]` copy as `0.0`/`1.0`.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.cells
            .iter()
            .flatten()
            .flat_map(|cell| cell.iter().map(|&bit| if bit { 1.0 } else { 0.0 }))
            .collect()
    }

    #[inline]
    pub fn as_array(&self) -> &[[[bool; TENSOR_CHANNELS]; 8]; 8] {
        &self.cells
    }
}

impl Board {
    pub fn to_tensor(&self) -> BoardTensor {
        encode(self, None)
    }

    pub fn to_fog_tensor(&self, color: Color) -> BoardTensor {
        encode(self, Some(self.sight(color)))
    }

    /// Rebuilds a board from a full (non-fog) tensor. The fullmove number is
    /// not encoded and must be supplied.
    pub fn from_tensor(tensor: &BoardTensor, fullmove_number: u32) -> Board {
        let mut castling: CastlingRights = 0;
        for (flag, channel) in CASTLING_CHANNELS {
            if tensor.plane_any(channel) {
                castling |= flag;
            }
        }

        let side_to_move = if tensor.plane_any(CHANNEL_SIDE_TO_MOVE) {
            Color::White
        } else {
            Color::Black
        };

        let mut placements = Vec::with_capacity(32);
        let mut en_passant = None;
        for rank_index in 0..8 {
            for file_index in 0..8 {
                let position = Position::new(rank_index as i8 + 1, file_index as i8 + 1);
                let marker = en_passant_marker(tensor, rank_index, file_index);
                if let Some((target, _)) = marker {
                    en_passant = en_passant.or(Some(target));
                }
                let marker_channel = marker.map(|(_, channel)| channel);
                let occupant = ALL_COLORS.iter().find_map(|&color| {
                    ALL_PIECE_KINDS
                        .iter()
                        .map(|&kind| (kind, piece_channel(color, kind)))
                        .find(|&(_, channel)| {
                            Some(channel) != marker_channel && tensor.get(rank_index, file_index, channel)
                        })
                        .map(|(kind, _)| (position, color, kind))
                });
                if let Some(placement) = occupant {
                    placements.push(placement);
                }
            }
        }

        let halfmove_clock = tensor
            .as_array()
            .iter()
            .flatten()
            .position(|cell| cell[CHANNEL_CLOCK_OR_SIGHT])
            .unwrap_or(0) as u32;

        let board = Board::from_parts(
            placements,
            castling,
            side_to_move,
            en_passant,
            halfmove_clock,
            fullmove_number,
        );
        tracing::debug!(fen = %board.fen(), "board built from tensor");
        board
    }
}

// Pawns never stand on their own back rank, so a pawn bit there is the
// en-passant marker. Returns the target square and the marker's channel.
fn en_passant_marker(tensor: &BoardTensor, rank_index: usize, file_index: usize) -> Option<(Position, usize)> {
    let file = file_index as i8 + 1;
    let white_pawn = piece_channel(Color::White, PieceKind::Pawn);
    let black_pawn = piece_channel(Color::Black, PieceKind::Pawn);
    if rank_index == 0 && tensor.get(0, file_index, white_pawn) {
        return Some((Position::new(3, file), white_pawn));
    }
    if rank_index == 7 && tensor.get(7, file_index, black_pawn) {
        return Some((Position::new(6, file), black_pawn));
    }
    None
}

fn encode(board: &Board, sight: Option<SightSet>) -> BoardTensor {
    let mut tensor = BoardTensor::zeros();
    let visible = |position: Position| sight.is_none_or(|sight| sight.contains(position));

    for (flag, channel) in CASTLING_CHANNELS {
        if board.castling_rights() & flag != 0 {
            tensor.fill_plane(channel);
        }
    }
    if board.side_to_move() == Color::White {
        tensor.fill_plane(CHANNEL_SIDE_TO_MOVE);
    }

    match sight {
        None => {
            let clock = board.halfmove_clock().min(MAX_ENCODED_HALFMOVE_CLOCK) as usize;
            tensor.set(clock / 8, clock % 8, CHANNEL_CLOCK_OR_SIGHT, true);
        }
        Some(sight) => {
            for position in sight.iter() {
                tensor.set(
                    (position.rank - 1) as usize,
                    (position.file - 1) as usize,
                    CHANNEL_CLOCK_OR_SIGHT,
                    true,
                );
            }
        }
    }

    tensor.fill_plane(CHANNEL_ONES);

    for piece in board.pieces().filter(|piece| visible(piece.position)) {
        tensor.set(
            (piece.position.rank - 1) as usize,
            (piece.position.file - 1) as usize,
            piece_channel(piece.color, piece.kind),
            true,
        );
    }

    if let Some(target) = board.en_passant().filter(|target| visible(*target)) {
        let file_index = (target.file - 1) as usize;
        if target.rank == 3 {
            tensor.set(0, file_index, piece_channel(Color::White, PieceKind::Pawn), true);
        } else {
            tensor.set(7, file_index, piece_channel(Color::Black, PieceKind::Pawn), true);
        }
    }

    tensor
}
