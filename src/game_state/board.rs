//! Board aggregate.
//!
//! `Board` owns a piece arena, the Position to PieceId map, rights, clocks, and
//! the two cached FEN forms. The only mutation entry point is
//! [`Board::apply_move`](crate::move_generation::legal_move_apply); every
//! other method is a read-only query.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::errors::BoardError;
use crate::game_state::piece::{Piece, PieceId};
use crate::game_state::position::Position;
use crate::utils::fen_generator::{generate_fen, generate_fog_fen};
use crate::utils::fen_parser::parse_fen_fields;

#[derive(Debug, Clone)]
pub struct Board {
    // Every piece that ever stood on this board, indexed by `PieceId`.
    pub(crate) arena: Vec<Piece>,
    // Pieces currently on the board.
    pub(crate) squares: BTreeMap<Position, PieceId>,

    pub(crate) castling: CastlingRights,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<Position>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,

    // Bumped by every applied move; moves from older revisions are rejected.
    pub(crate) revision: u64,

    pub(crate) fen: Arc<str>,
    pub(crate) fog_fen: Arc<str>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Builds a board from a full FEN string. A blank string yields the
    /// starting position.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        if fen.trim().is_empty() {
            return Self::from_fen(STARTING_POSITION_FEN);
        }

        let fields = parse_fen_fields(fen, None)?;

        let mut placements = Vec::with_capacity(32);
        for rank in 1..=8i8 {
            for file in 1..=8i8 {
                let cell = fields.grid[(8 - rank) as usize][(file - 1) as usize];
                if let Some((color, kind)) = cell.and_then(piece_from_fen_char) {
                    placements.push((Position::new(rank, file), color, kind));
                }
            }
        }

        let side_to_move = match fields.side_to_move.as_str() {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(BoardError::InvalidSideToMove(other.to_owned())),
        };
        let castling = parse_castling_rights(&fields.castling)?;
        let en_passant = match fields.en_passant.as_str() {
            "-" => None,
            square => Some(Position::from_algebraic(square)?),
        };
        let halfmove_clock = parse_counter("halfmove clock", &fields.halfmove_clock)?;
        let fullmove_number = parse_counter("fullmove number", &fields.fullmove_number)?;

        let board = Self::from_parts(
            placements,
            castling,
            side_to_move,
            en_passant,
            halfmove_clock,
            fullmove_number,
        );
        tracing::debug!(fen = %board.fen, "board built from FEN");
        Ok(board)
    }

    /// Assembles a board from already-validated parts and fills both caches.
    pub(crate) fn from_parts(
        placements: impl IntoIterator<Item = (Position, Color, PieceKind)>,
        castling: CastlingRights,
        side_to_move: Color,
        en_passant: Option<Position>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut board = Self {
            arena: Vec::with_capacity(32),
            squares: BTreeMap::new(),
            castling,
            side_to_move,
            en_passant,
            halfmove_clock,
            fullmove_number,
            revision: 0,
            fen: Arc::from(""),
            fog_fen: Arc::from(""),
        };

        for (position, color, kind) in placements {
            let id = PieceId(board.arena.len() as u16);
            board.arena.push(Piece {
                id,
                kind,
                color,
                position,
            });
            board.squares.insert(position, id);
        }

        board.refresh_serializations();
        board
    }

    /// Recomputes the cached full and fog FEN strings. The full FEN goes
    /// first because generated moves snapshot it.
    pub(crate) fn refresh_serializations(&mut self) {
        self.fen = Arc::from(generate_fen(self));
        self.fog_fen = Arc::from(generate_fog_fen(self, self.side_to_move));
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling & castle_flag(color, side) != 0
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Position> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Cached full-visibility FEN.
    #[inline]
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Cached fog FEN from the side to move's point of view.
    #[inline]
    pub fn fog_fen(&self) -> &str {
        &self.fog_fen
    }

    /// Arena lookup. Returns captured pieces too; see [`Board::is_on_board`].
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.arena.get(id.index())
    }

    #[inline]
    pub fn is_on_board(&self, id: PieceId) -> bool {
        self.piece(id)
            .is_some_and(|piece| self.squares.get(&piece.position) == Some(&id))
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.squares
            .get(&position)
            .and_then(|id| self.arena.get(id.index()))
    }

    /// Pieces on the board, ordered a1, b1, ..., h8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.values().map(|id| &self.arena[id.index()])
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.position)
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, BoardError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(BoardError::InvalidCastling(ch)),
        }
    }

    Ok(rights)
}

fn parse_counter(field: &'static str, value: &str) -> Result<u32, BoardError> {
    value.parse::<u32>().map_err(|_| BoardError::InvalidCounter {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::errors::{BoardError, FenError};
    use crate::game_state::position::Position;

    #[test]
    fn default_board_is_starting_position() {
        let board = Board::default();

        assert_eq!(board.fen(), STARTING_POSITION_FEN);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CASTLE_ALL);
        assert_eq!(board.en_passant(), None);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king_position(Color::Black), Some(Position::new(8, 5)));
    }

    #[test]
    fn blank_fen_yields_starting_position() {
        let board = Board::from_fen("  ").expect("blank FEN should give start position");
        assert_eq!(board.fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_round_trips_through_board() {
        for fen in [
            STARTING_POSITION_FEN,
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let board = Board::from_fen(fen).expect("FEN should parse");
            assert_eq!(board.fen(), fen);
            let reparsed = Board::from_fen(board.fen()).expect("generated FEN should parse");
            assert_eq!(reparsed.fen(), board.fen());
        }
    }

    #[test]
    fn piece_ids_are_unique_and_keyed_by_position() {
        let board = Board::new_game();
        for piece in board.pieces() {
            assert_eq!(board.piece_at(piece.position), Some(piece));
            assert_eq!(board.piece(piece.id), Some(piece));
            assert!(board.is_on_board(piece.id));
        }
    }

    #[test]
    fn constructor_propagates_parse_errors() {
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8 w - - 0 1").err(),
            Some(BoardError::Fen(FenError::RankCount(7)))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8 x - - 0 1").err(),
            Some(BoardError::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8 w KX - 0 1").err(),
            Some(BoardError::InvalidCastling('X'))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - z9 0 1").err(),
            Some(BoardError::InvalidSquare("z9".to_owned()))
        );
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - -3 1"),
            Err(BoardError::InvalidCounter { field: "halfmove clock", .. })
        ));
        assert!(Board::from_fen("UUUUUUUU/8/8/8/8/8/8/8 w - - 0 1").is_err());
    }
}
