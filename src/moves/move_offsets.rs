//! Step offsets and ray directions, as `(d_rank, d_file)` pairs.

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;

    #[test]
    fn knight_offsets_from_d4_have_eight_targets() {
        let d4 = Position::new(4, 4);
        let count = KNIGHT_OFFSETS
            .iter()
            .filter(|(dr, df)| d4.offset(*dr, *df).valid())
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn knight_offsets_from_corner_have_two_targets() {
        let a1 = Position::new(1, 1);
        let count = KNIGHT_OFFSETS
            .iter()
            .filter(|(dr, df)| a1.offset(*dr, *df).valid())
            .count();
        assert_eq!(count, 2);
    }
}
