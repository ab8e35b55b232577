//! Move application: the single mutation entry point of a [`Board`].

use crate::game_state::board::Board;
use crate::game_state::chess_rules::HALFMOVE_DRAW_LIMIT;
use crate::game_state::chess_types::*;
use crate::game_state::errors::BoardError;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

impl Board {
    /// Applies a move generated from this board's current revision.
    ///
    /// The move is validated before anything is touched, so an error leaves
    /// the board exactly as it was. On success every field and both cached
    /// FEN strings describe the new position.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Outcome, BoardError> {
        if mv.revision != self.revision || self.squares.get(&mv.from) != Some(&mv.piece) {
            return Err(BoardError::StaleMove {
                from: mv.from,
                to: mv.to,
                move_revision: mv.revision,
                board_revision: self.revision,
            });
        }

        self.squares.remove(&mv.from);
        if let Some(captured) = mv.captured {
            self.squares.remove(&captured.position);
        }

        self.en_passant = None;
        if mv.kind == PieceKind::Pawn && (mv.to.rank - mv.from.rank).abs() == 2 {
            self.en_passant = Some(Position::new((mv.from.rank + mv.to.rank) / 2, mv.from.file));
        }

        let piece = &mut self.arena[mv.piece.index()];
        piece.position = mv.to;
        if let Some(promotion) = mv.promotion {
            piece.kind = promotion;
        }
        self.squares.insert(mv.to, mv.piece);

        if let Some(rook) = mv.castling_rook {
            self.squares.remove(&rook.from);
            self.arena[rook.id.index()].position = rook.to;
            self.squares.insert(rook.to, rook.id);
        }

        self.update_castling_rights(mv);

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        if mv.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.revision += 1;
        self.refresh_serializations();

        tracing::trace!(
            from = %mv.from,
            to = %mv.to,
            fen = %self.fen,
            "applied move"
        );

        let outcome = if mv.captures_king() {
            Outcome::Win(mv.color)
        } else if self.halfmove_clock >= HALFMOVE_DRAW_LIMIT {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };
        if outcome.is_over() {
            tracing::debug!(?outcome, fen = %self.fen, "game over");
        }
        Ok(outcome)
    }

    // Square-based: a rook leaving a corner clears that corner's right,
    // whichever rook it is.
    fn update_castling_rights(&mut self, mv: &Move) {
        match mv.kind {
            PieceKind::King => {
                self.castling &= !(castle_flag(mv.color, CastleSide::Kingside)
                    | castle_flag(mv.color, CastleSide::Queenside));
            }
            PieceKind::Rook => match (mv.from.rank, mv.from.file) {
                (1, 1) => self.castling &= !CASTLE_WHITE_QUEENSIDE,
                (1, 8) => self.castling &= !CASTLE_WHITE_KINGSIDE,
                (8, 1) => self.castling &= !CASTLE_BLACK_QUEENSIDE,
                (8, 8) => self.castling &= !CASTLE_BLACK_KINGSIDE,
                _ => {}
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::game_state::errors::BoardError;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;

    fn find_move(board: &Board, from: &str, to: &str) -> Move {
        let from = Position::from_algebraic(from).expect("from square should parse");
        let to = Position::from_algebraic(to).expect("to square should parse");
        board
            .all_moves(board.side_to_move())
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion.is_none_or(|p| p == PieceKind::Queen))
            .expect("move should be generated")
    }

    fn play(board: &mut Board, from: &str, to: &str) -> Outcome {
        let mv = find_move(board, from, to);
        board.apply_move(&mv).expect("fresh move should apply")
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut board = Board::new_game();
        assert_eq!(play(&mut board, "e2", "e4"), Outcome::Ongoing);
        assert_eq!(
            board.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        play(&mut board, "g8", "f6");
        assert_eq!(board.en_passant(), None);
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 2);
    }

    #[test]
    fn en_passant_after_e4_a6_e5_d5() {
        let mut board = Board::new_game();
        play(&mut board, "e2", "e4");
        play(&mut board, "a7", "a6");
        play(&mut board, "e4", "e5");
        play(&mut board, "d7", "d5");
        assert_eq!(
            board.fen(),
            "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"
        );

        let e5 = board
            .piece_at(Position::new(5, 5))
            .expect("e5 pawn should exist")
            .id;
        let legal = board.legal_moves(Color::White);
        let en_passant: Vec<_> = legal[&e5].iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].to, Position::new(6, 4));
        assert_eq!(
            en_passant[0].captured.map(|c| c.position),
            Some(Position::new(5, 4))
        );

        let mv = en_passant[0].clone();
        assert_eq!(board.apply_move(&mv), Ok(Outcome::Ongoing));
        assert_eq!(
            board.fen(),
            "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
        );
        assert!(!board.is_on_board(mv.captured.expect("capture").id));
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        let mut board = Board::new_game();
        play(&mut board, "e2", "e4");
        play(&mut board, "a7", "a6");
        play(&mut board, "e4", "e5");
        play(&mut board, "d7", "d5");
        play(&mut board, "b1", "c3");
        play(&mut board, "a6", "a5");
        assert!(board.all_moves(Color::White).iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn castling_relocates_king_and_rook() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        play(&mut board, "e1", "g1");
        assert_eq!(board.fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

        play(&mut board, "e8", "c8");
        assert_eq!(board.fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");
    }

    #[test]
    fn castling_unblocked_by_clearing_f1() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4KB1R w K - 0 1").expect("FEN should parse");
        assert!(board.all_moves(Color::White).iter().all(|mv| !mv.is_castling()));

        play(&mut board, "f1", "c4");
        play(&mut board, "e8", "d8");
        let castle = board
            .all_moves(Color::White)
            .into_iter()
            .find(|mv| mv.is_castling())
            .expect("castling should appear once f1 is clear");
        assert_eq!(castle.to, Position::new(1, 7));
        board.apply_move(&castle).expect("castling should apply");
        assert_eq!(board.piece_at(Position::new(1, 6)).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.piece_at(Position::new(1, 7)).map(|p| p.kind), Some(PieceKind::King));
        assert!(board.piece_at(Position::new(1, 8)).is_none());
    }

    #[test]
    fn rook_leaving_corner_clears_only_that_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        play(&mut board, "a1", "a2");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        play(&mut board, "h8", "h7");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(board.fen(), "r3k3/7r/8/8/8/8/R7/4K2R w Kq - 2 2");
    }

    #[test]
    fn promotion_changes_piece_kind() {
        let mut board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 3 10").expect("FEN should parse");
        let mv = find_move(&board, "a7", "a8");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        board.apply_move(&mv).expect("promotion should apply");
        assert_eq!(board.fen(), "Q3k3/8/8/8/8/8/8/4K3 b - - 0 10");
        assert_eq!(board.piece(mv.piece).map(|p| p.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn fifty_quiet_half_moves_draw() {
        let mut board = Board::from_fen("1n2k3/8/8/8/8/8/8/1N2K3 w - - 0 1").expect("FEN should parse");
        let shuffle = [("b1", "c3"), ("b8", "c6"), ("c3", "b1"), ("c6", "b8")];
        for ply in 0..50 {
            let (from, to) = shuffle[ply % shuffle.len()];
            let outcome = play(&mut board, from, to);
            if ply < 49 {
                assert_eq!(outcome, Outcome::Ongoing, "ply {ply} should not end the game");
            } else {
                assert_eq!(outcome, Outcome::Draw);
            }
        }
        assert_eq!(board.halfmove_clock(), 50);
    }

    #[test]
    fn counters_saturate_at_their_maximum() {
        let mut board =
            Board::from_fen("4k3/8/8/8/8/8/8/4K2N w - - 4294967295 1").expect("FEN should parse");
        assert_eq!(play(&mut board, "h1", "g3"), Outcome::Draw);
        assert_eq!(board.halfmove_clock(), u32::MAX);

        let mut board =
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295").expect("FEN should parse");
        play(&mut board, "e8", "d8");
        assert_eq!(board.fullmove_number(), u32::MAX);
        assert!(board.fen().ends_with(" 1 4294967295"));
    }

    #[test]
    fn king_capture_wins_regardless_of_clock() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4R3/4K3 w - - 49 60").expect("FEN should parse");
        let outcome = play(&mut board, "e2", "e8");
        assert_eq!(outcome, Outcome::Win(Color::White));
        assert_eq!(board.king_position(Color::Black), None);

        let mut board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 b - - 0 60").expect("FEN should parse");
        assert_eq!(play(&mut board, "e2", "e1"), Outcome::Win(Color::Black));
    }

    #[test]
    fn stale_moves_are_rejected_without_mutation() {
        let mut board = Board::new_game();
        let moves = board.all_moves(Color::White);
        let first = moves[0].clone();
        let second = moves[1].clone();
        board.apply_move(&first).expect("fresh move should apply");

        let before = board.fen().to_owned();
        let revision = board.revision();
        assert!(matches!(
            board.apply_move(&second),
            Err(BoardError::StaleMove { move_revision: 0, board_revision: 1, .. })
        ));
        assert_eq!(board.fen(), before);
        assert_eq!(board.revision(), revision);
    }

    #[test]
    fn outstanding_moves_are_unaffected_by_application() {
        let mut board = Board::new_game();
        let moves = board.all_moves(Color::White);
        let snapshot = moves.clone();
        board.apply_move(&moves[0]).expect("fresh move should apply");
        assert_eq!(moves, snapshot);
    }

    #[test]
    fn fog_cache_follows_side_to_move() {
        let mut board = Board::new_game();
        assert_eq!(board.fog_fen(), board.to_fog_fen(Color::White));
        play(&mut board, "e2", "e4");
        assert_eq!(board.fog_fen(), board.to_fog_fen(Color::Black));
        assert_eq!(board.fen(), board.to_fen());
    }
}
