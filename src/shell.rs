use crate::board::{Board, Square, DEFAULT_BOARD_SIZE};
use crate::error::ShellError;
use crate::notation::parse_square;
use crate::search::Query;
use std::io::{BufRead, Write};

/// Line-based prompt that asks for a board size and two squares.
pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Shell { reader, writer }
    }

    pub fn read_query(&mut self) -> Result<Query, ShellError> {
        let board = self.ask_board()?;
        let start = self.ask_square(&board, "starting")?;
        let target = self.ask_square(&board, "target")?;
        Ok(Query::new(board, start, target))
    }

    /// An empty answer picks the standard size; anything out of range is
    /// clamped by `Board::new`.
    pub fn ask_board(&mut self) -> Result<Board, ShellError> {
        let answer = self.prompt(&format!(
            "Board size ({}..={}, standard is {})",
            Board::MIN_SIZE,
            Board::MAX_SIZE,
            DEFAULT_BOARD_SIZE
        ))?;
        if answer.is_empty() {
            return Ok(Board::default());
        }

        let length: i64 = answer
            .parse()
            .map_err(|_| ShellError::InvalidSize(answer.clone()))?;
        Ok(Board::new(usize::try_from(length.max(0)).unwrap_or(usize::MAX)))
    }

    pub fn ask_square(&mut self, board: &Board, which: &str) -> Result<Square, ShellError> {
        let edge = board.size() as u8 - 1;
        let last = Square::from_coords(edge, edge);
        let answer = self.prompt(&format!(
            "Enter the {} square in chess notation (e.g. a2)\nIt has to fit on the board: a1 to {}",
            which, last
        ))?;
        Ok(parse_square(&answer, board.size())?)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, message: &str) -> Result<String, ShellError> {
        writeln!(self.writer, "{}", message)?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ShellError::UnexpectedEof);
        }
        Ok(line.trim().to_string())
    }
}
