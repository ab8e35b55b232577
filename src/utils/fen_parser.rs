//! FEN tokenizer.
//!
//! Splits a FEN string into its six fields and expands the board field into an
//! 8x8 grid of piece characters. It performs no chess validation beyond the
//! grid shape; turning fields into a `Board` is `Board::from_fen`'s job.
//!
//! The fog-aware form passes an unknown marker (see
//! [`FOG_UNKNOWN_MARK`](crate::game_state::chess_rules::FOG_UNKNOWN_MARK)),
//! which is then accepted as a grid cell.

use crate::game_state::chess_types::piece_from_fen_char;
use crate::game_state::errors::FenError;

/// Grid row 0 is rank 8, row 7 is rank 1. Column 0 is file a.
pub type FenGrid = [[Option<char>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenFields {
    pub grid: FenGrid,
    pub side_to_move: String,
    pub castling: String,
    pub en_passant: String,
    pub halfmove_clock: String,
    pub fullmove_number: String,
}

pub fn parse_fen_fields(fen: &str, unknown_mark: Option<char>) -> Result<FenFields, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next().ok_or(FenError::MissingField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(FenError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    Ok(FenFields {
        grid: parse_board(board_part, unknown_mark)?,
        side_to_move: side_part.to_owned(),
        castling: castling_part.to_owned(),
        en_passant: en_passant_part.to_owned(),
        halfmove_clock: halfmove_part.to_owned(),
        fullmove_number: fullmove_part.to_owned(),
    })
}

fn parse_board(board_part: &str, unknown_mark: Option<char>) -> Result<FenGrid, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut grid: FenGrid = [[None; 8]; 8];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidEmptyRun(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let is_unknown = unknown_mark == Some(ch);
            if !is_unknown && piece_from_fen_char(ch).is_none() {
                return Err(FenError::InvalidPieceChar(ch));
            }
            if file >= 8 {
                return Err(FenError::RankWidth {
                    rank: 8 - row,
                    width: file + 1,
                });
            }

            grid[row][file] = Some(ch);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth {
                rank: 8 - row,
                width: file,
            });
        }
    }

    Ok(grid)
}
