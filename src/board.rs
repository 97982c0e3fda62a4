use crate::error::BoardError;
use rand::Rng;
use std::fmt;

pub const DEFAULT_BOARD_SIZE: usize = 8;

/// One cell of the board, 0-indexed from the bottom-left corner.
///
/// `Square::new(0, 1, 8)` is b1 and `Square::new(2, 3, 8)` is d3. The board
/// size is only used for validation and is not part of the square's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32, board_size: usize) -> Result<Self, BoardError> {
        // No board is wider than MAX_SIZE, which also keeps both fields in u8.
        let size = board_size.min(Board::MAX_SIZE) as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return Err(BoardError::InvalidCoordinate {
                row,
                col,
                size: board_size,
            });
        }
        Ok(Self::from_coords(row as u8, col as u8))
    }

    /// Caller guarantees both coordinates are on the board.
    pub(crate) const fn from_coords(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn to_tuple(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Row/column as drawn on screen, with the top row first.
    pub fn display_coords(&self, board_size: usize) -> (usize, usize) {
        (board_size - 1 - self.row as usize, self.col as usize)
    }

    /// Index into a row-major `size * size` table.
    pub fn index(&self, board_size: usize) -> usize {
        self.row as usize * board_size + self.col as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row as u32 + 1)
    }
}

/// Square board with a side length clamped to `MIN_SIZE..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: usize,
}

impl Board {
    /// Smallest board on which every square has a knight move.
    pub const MIN_SIZE: usize = 4;
    /// One file letter per column.
    pub const MAX_SIZE: usize = 26;

    /// Out-of-range lengths are clamped, never rejected.
    pub fn new(length: usize) -> Self {
        Self {
            size: length.clamp(Self::MIN_SIZE, Self::MAX_SIZE),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, square: &Square) -> bool {
        (square.row as usize) < self.size && (square.col as usize) < self.size
    }

    /// Builds a square validated against this board.
    pub fn square(&self, row: i32, col: i32) -> Result<Square, BoardError> {
        Square::new(row, col, self.size)
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.size as u8)
            .flat_map(move |row| (0..self.size as u8).map(move |col| Square::from_coords(row, col)))
    }

    pub fn random_square<R: Rng + ?Sized>(&self, rng: &mut R) -> Square {
        let size = self.size as u8;
        Square::from_coords(rng.gen_range(0..size), rng.gen_range(0..size))
    }

    /// Tile colours in display orientation: 0 for light, 1 for dark.
    pub fn tiles(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|y| (0..self.size).map(|x| ((x + y) % 2) as u8).collect())
            .collect()
    }

    /// Rank labels, top to bottom unless `inverted`.
    pub fn row_labels(&self, inverted: bool) -> Vec<usize> {
        if inverted {
            (1..=self.size).collect()
        } else {
            (1..=self.size).rev().collect()
        }
    }

    /// File labels, left to right unless `inverted`.
    pub fn column_labels(&self, inverted: bool) -> Vec<char> {
        let labels = (0..self.size as u8).map(|x| (b'a' + x) as char);
        if inverted {
            labels.rev().collect()
        } else {
            labels.collect()
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}
