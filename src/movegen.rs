use crate::board::{Board, Square};

/// Knight jumps as (row, col) deltas, in the order moves are generated.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Squares one knight jump away from `square` that stay on a board of
    /// side `board_size`, in `KNIGHT_OFFSETS` order.
    pub fn generate_moves(&self, square: Square, board_size: usize) -> Vec<Square> {
        let size = board_size as i16;
        let row = square.row() as i16;
        let col = square.col() as i16;

        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row + dr as i16;
                let c = col + dc as i16;
                if r >= 0 && r < size && c >= 0 && c < size {
                    Some(Square::from_coords(r as u8, c as u8))
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn generate_board_moves(&self, board: &Board, square: Square) -> Vec<Square> {
        self.generate_moves(square, board.size())
    }

    pub fn is_knight_move(&self, from: Square, to: Square) -> bool {
        let dr = (to.row() as i16 - from.row() as i16).abs();
        let dc = (to.col() as i16 - from.col() as i16).abs();
        (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col, 26).unwrap()
    }

    #[test]
    fn test_corner_has_two_moves() {
        let moves = MoveGenerator::new().generate_moves(sq(0, 0), 8);
        assert_eq!(moves, vec![sq(2, 1), sq(1, 2)]);
    }

    #[test]
    fn test_center_has_eight_moves() {
        let moves = MoveGenerator::new().generate_moves(sq(4, 4), 8);
        assert_eq!(
            moves,
            vec![
                sq(6, 5),
                sq(5, 6),
                sq(3, 6),
                sq(2, 5),
                sq(2, 3),
                sq(3, 2),
                sq(5, 2),
                sq(6, 3),
            ]
        );
    }

    #[test]
    fn test_edge_moves_stay_on_board() {
        let generator = MoveGenerator::new();
        for size in [4, 5, 8, 26] {
            let board = Board::new(size);
            for square in board.squares() {
                let moves = generator.generate_board_moves(&board, square);
                assert!((2..=8).contains(&moves.len()), "{} on {}", square, board);
                for mv in moves {
                    assert!(board.contains(&mv));
                    assert!(generator.is_knight_move(square, mv));
                }
            }
        }
    }

    #[test]
    fn test_far_corner_on_small_board() {
        let moves = MoveGenerator::new().generate_moves(sq(3, 3), 4);
        assert_eq!(moves, vec![sq(1, 2), sq(2, 1)]);
    }

    #[test]
    fn test_is_knight_move() {
        let generator = MoveGenerator::new();
        assert!(generator.is_knight_move(sq(0, 1), sq(2, 2)));
        assert!(generator.is_knight_move(sq(2, 2), sq(0, 1)));
        assert!(!generator.is_knight_move(sq(0, 0), sq(2, 2)));
        assert!(!generator.is_knight_move(sq(3, 3), sq(3, 3)));
    }
}
