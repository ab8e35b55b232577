//! Board-to-FEN writers: full visibility and fog of war.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::FOG_UNKNOWN_MARK;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::visibility::sight::SightSet;

impl Board {
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn to_fog_fen(&self, color: Color) -> String {
        generate_fog_fen(self, color)
    }
}

pub fn generate_fen(board: &Board) -> String {
    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board, None),
        board.side_to_move().fen_char(),
        generate_castling_field(board.castling_rights()),
        generate_en_passant_field(board.en_passant()),
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

/// FEN as seen by `color`: squares outside its sight set print as the
/// unknown mark, only its own castling rights show, the en-passant target
/// shows only when in sight, and the halfmove clock is always `0`.
pub fn generate_fog_fen(board: &Board, color: Color) -> String {
    let sight = board.sight(color);

    let own_rights = board.castling_rights()
        & (castle_flag(color, CastleSide::Kingside) | castle_flag(color, CastleSide::Queenside));
    let en_passant = board.en_passant().filter(|square| sight.contains(*square));

    format!(
        "{} {} {} {} 0 {}",
        generate_board_field(board, Some(&sight)),
        board.side_to_move().fen_char(),
        generate_castling_field(own_rights),
        generate_en_passant_field(en_passant),
        board.fullmove_number()
    )
}

fn generate_board_field(board: &Board, sight: Option<&SightSet>) -> String {
    let mut out = String::with_capacity(72);

    for rank in (1..=8i8).rev() {
        let mut empty_count = 0u8;

        for file in 1..=8i8 {
            let position = Position::new(rank, file);
            let visible = sight.is_none_or(|sight| sight.contains(position));
            let cell = if visible {
                board.piece_at(position).map(|piece| piece.fen_char())
            } else {
                Some(FOG_UNKNOWN_MARK)
            };

            match cell {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 1 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Position>) -> String {
    square.map_or_else(|| "-".to_owned(), Position::to_algebraic)
}
