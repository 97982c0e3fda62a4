pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod render;
pub mod report;
pub mod search;
pub mod shell;

pub use board::{Board, Square};
pub use error::{BoardError, NotationError, SearchError, ShellError};
pub use movegen::{MoveGenerator, KNIGHT_OFFSETS};
pub use search::{shortest_path, Path, PathFinder, Query};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    // Knight distance from `start` to every square, indexed by Square::index.
    fn distances(board: &Board, start: Square) -> Vec<Option<usize>> {
        let size = board.size();
        let generator = MoveGenerator::new();
        let mut dist = vec![None; size * size];
        dist[start.index(size)] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(square) = queue.pop_front() {
            let d = dist[square.index(size)].unwrap();
            for next in generator.generate_moves(square, size) {
                if dist[next.index(size)].is_none() {
                    dist[next.index(size)] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    fn assert_valid_path(board: &Board, path: &Path, start: Square, target: Square) {
        let generator = MoveGenerator::new();
        assert_eq!(path.start(), start);
        assert_eq!(path.target(), target);
        for pair in path.squares().windows(2) {
            assert!(
                generator.generate_moves(pair[0], board.size()).contains(&pair[1]),
                "{} -> {} is not a knight move",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_b1_to_f7_end_to_end() {
        let board = Board::new(8);
        let start = Square::parse("b1", board.size()).unwrap();
        let target = Square::parse("f7", board.size()).unwrap();

        let path = shortest_path(&board, start, target).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.moves(), 4);
        assert_valid_path(&board, &path, start, target);
        assert_eq!(path.to_string(), "b1 -> c3 -> e4 -> g5 -> f7");
    }

    #[test]
    fn test_every_pair_on_small_boards() {
        let mut finder = PathFinder::new();
        for size in [4, 5, 6] {
            let board = Board::new(size);
            for start in board.squares() {
                let dist = distances(&board, start);
                for target in board.squares() {
                    let path = finder.find_shortest_path(&board, start, target).unwrap();
                    assert_valid_path(&board, &path, start, target);
                    assert_eq!(Some(path.moves()), dist[target.index(size)]);
                }
            }
        }
    }

    #[test]
    fn test_random_queries_are_shortest() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut finder = PathFinder::new();
        for _ in 0..300 {
            let board = Board::new(rng.gen_range(4..=26));
            let start = board.random_square(&mut rng);
            let target = board.random_square(&mut rng);

            let path = finder.find_shortest_path(&board, start, target).unwrap();
            assert_valid_path(&board, &path, start, target);
            assert_eq!(Some(path.moves()), distances(&board, start)[target.index(board.size())]);
        }
    }

    #[test]
    fn test_corner_to_corner_on_largest_board() {
        let board = Board::new(100);
        assert_eq!(board.size(), Board::MAX_SIZE);
        let start = board.square(0, 0).unwrap();
        let target = board.square(25, 25).unwrap();
        let path = shortest_path(&board, start, target).unwrap();
        assert_valid_path(&board, &path, start, target);
        assert_eq!(Some(path.moves()), distances(&board, start)[target.index(26)]);
    }

    #[test]
    fn test_searches_are_deterministic() {
        let board = Board::new(9);
        let start = board.square(0, 8).unwrap();
        let target = board.square(8, 0).unwrap();
        let first = shortest_path(&board, start, target).unwrap();
        for _ in 0..10 {
            assert_eq!(shortest_path(&board, start, target).unwrap(), first);
        }
    }

    #[test]
    fn test_same_square_differs_from_unreachable() {
        let board = Board::new(4);
        let square = board.square(1, 2).unwrap();
        let path = shortest_path(&board, square, square).unwrap();
        assert_eq!(path.squares(), &[square]);

        let mut finder = PathFinder::new();
        finder.set_max_moves(Some(0));
        let other = board.square(0, 0).unwrap();
        assert!(matches!(
            finder.find_shortest_path(&board, square, other),
            Err(SearchError::Unreachable { .. })
        ));
    }
}
