use crate::board::{Board, Square};
use crate::error::SearchError;
use crate::movegen::MoveGenerator;
use std::collections::VecDeque;
use std::fmt;

/// A knight's route: the start square first, the target last, one knight
/// jump between neighbours. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    fn new(squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        Self { squares }
    }

    pub fn start(&self) -> Square {
        self.squares[0]
    }

    pub fn target(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of squares, start included.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Number of knight jumps.
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    pub fn contains(&self, square: &Square) -> bool {
        self.squares.contains(square)
    }

    /// 0-based position of `square` along the path.
    pub fn step_of(&self, square: &Square) -> Option<usize> {
        self.squares.iter().position(|s| s == square)
    }

    pub fn into_squares(self) -> Vec<Square> {
        self.squares
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

/// A board plus the two squares to connect on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub board: Board,
    pub start: Square,
    pub target: Square,
}

impl Query {
    pub fn new(board: Board, start: Square, target: Square) -> Self {
        Self {
            board,
            start,
            target,
        }
    }

    /// b1 to f7 on a standard board.
    pub fn standard() -> Self {
        Self::new(
            Board::default(),
            Square::from_coords(0, 1),
            Square::from_coords(6, 5),
        )
    }
}

/// Breadth-first search for the shortest knight route between two squares.
pub struct PathFinder {
    move_generator: MoveGenerator,
    max_moves: Option<usize>,
    nodes_expanded: u64,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            move_generator: MoveGenerator::new(),
            max_moves: None,
            nodes_expanded: 0,
        }
    }

    /// Stop extending routes that already have `max_moves` jumps.
    pub fn set_max_moves(&mut self, max_moves: Option<usize>) {
        self.max_moves = max_moves;
    }

    pub fn max_moves(&self) -> Option<usize> {
        self.max_moves
    }

    /// Squares whose moves were generated during the last search.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Both squares must already belong to `board`.
    ///
    /// Routes are expanded in FIFO order and every square is queued at most
    /// once, so the first route that reaches `target` is a shortest one. When
    /// several shortest routes exist the one found first wins.
    pub fn find_shortest_path(
        &mut self,
        board: &Board,
        start: Square,
        target: Square,
    ) -> Result<Path, SearchError> {
        debug_assert!(board.contains(&start));
        debug_assert!(board.contains(&target));

        self.nodes_expanded = 0;

        if start == target {
            return Ok(Path::new(vec![start]));
        }

        let size = board.size();
        let mut visited = vec![false; size * size];
        let mut queue: VecDeque<Vec<Square>> = VecDeque::new();
        queue.push_back(vec![start]);

        let mut shortest: Option<Vec<Square>> = None;

        while let Some(current) = queue.pop_front() {
            let last = current[current.len() - 1];

            if last == target {
                let is_shorter = shortest
                    .as_ref()
                    .map_or(true, |best| current.len() < best.len());
                if is_shorter {
                    shortest = Some(current);
                }
                continue;
            }

            if let Some(max) = self.max_moves {
                if current.len() - 1 >= max {
                    continue;
                }
            }

            self.nodes_expanded += 1;
            for next in self.move_generator.generate_moves(last, size) {
                let index = next.index(size);
                if visited[index] {
                    continue;
                }
                visited[index] = true;

                let mut extended = Vec::with_capacity(current.len() + 1);
                extended.extend_from_slice(&current);
                extended.push(next);
                queue.push_back(extended);
            }
        }

        shortest
            .map(Path::new)
            .ok_or(SearchError::Unreachable { start, target })
    }

    pub fn solve(&mut self, query: &Query) -> Result<Path, SearchError> {
        self.find_shortest_path(&query.board, query.start, query.target)
    }
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off search with a fresh `PathFinder`.
pub fn shortest_path(board: &Board, start: Square, target: Square) -> Result<Path, SearchError> {
    PathFinder::new().find_shortest_path(board, start, target)
}
