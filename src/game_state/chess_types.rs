//! Core value types shared by the board model, move generation, and codecs.
//!
//! Ordinals on `Color` and `PieceKind` are spelled out explicitly because the
//! tensor encoder derives channel numbers from them.

/// Player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank pawns of this color start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Direction of pawn advance along the rank axis.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank holding this color's king and rooks at the start.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

/// Piece kind (color is stored separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PieceKind::Pawn),
            1 => Some(PieceKind::Knight),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// FEN letter for a colored piece: uppercase for white, lowercase for black.
#[inline]
pub fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    match color {
        Color::White => kind.fen_char().to_ascii_uppercase(),
        Color::Black => kind.fen_char(),
    }
}

/// Inverse of [`piece_to_fen_char`].
pub fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Color),
    Draw,
}

impl Outcome {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Which wing a castling move or right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File of the corner rook for this wing.
    #[inline]
    pub const fn corner_file(self) -> i8 {
        match self {
            CastleSide::Kingside => 8,
            CastleSide::Queenside => 1,
        }
    }

    /// File step from the king toward the corner.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

/// Rights bit for `color` castling on `side`.
#[inline]
pub const fn castle_flag(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
    }
}
