//! Terminal-oriented board renderer.
//!
//! `Display for Board` shows the fog view of the side to move, reconstructed
//! from the cached fog FEN. [`render_board`] shows everything.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::FOG_UNKNOWN_MARK;
use crate::game_state::errors::FenError;
use crate::utils::fen_parser::{parse_fen_fields, FenGrid};

/// Full-visibility board with coordinates; empty squares render as `·`.
pub fn render_board(board: &Board) -> String {
    // The cached FEN was produced by this crate and always parses.
    match parse_fen_fields(board.fen(), None) {
        Ok(fields) => render_grid(&fields.grid),
        Err(err) => format!("<unrenderable board: {err}>"),
    }
}

/// Renders any FEN (full or fog) with unknown squares shown as `FOG_UNKNOWN_MARK`.
pub fn render_fen(fen: &str) -> Result<String, FenError> {
    let fields = parse_fen_fields(fen, Some(FOG_UNKNOWN_MARK))?;
    Ok(render_grid(&fields.grid))
}

fn render_grid(grid: &FenGrid) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, cells) in grid.iter().enumerate() {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for (file, cell) in cells.iter().enumerate() {
            out.push(cell.unwrap_or('·'));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = render_fen(self.fog_fen()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
