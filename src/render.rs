use crate::board::Board;
use crate::search::Path;
use std::fmt::Write;

const LIGHT: char = '.';
const DARK: char = '#';

/// Draws `board` as text with each path square numbered from 1, e.g.
///
/// ```text
/// Start = a1   Target = b3
///  4   .  #  .  #
///  3   #  2  #  .
///  2   .  #  .  #
///  1   1  .  #  .
///      a  b  c  d
/// ```
pub fn render_path(board: &Board, path: &Path) -> String {
    let size = board.size();
    let mut cells: Vec<Vec<String>> = board
        .tiles()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|tile| (if tile == 0 { LIGHT } else { DARK }).to_string())
                .collect()
        })
        .collect();

    for (step, square) in path.squares().iter().enumerate() {
        let (y, x) = square.display_coords(size);
        cells[y][x] = (step + 1).to_string();
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Start = {}   Target = {}", path.start(), path.target());
    for (label, row) in board.row_labels(false).iter().zip(&cells) {
        let _ = write!(out, "{:>2} ", label);
        for cell in row {
            let _ = write!(out, "{:>3}", cell);
        }
        out.push('\n');
    }
    out.push_str("   ");
    for file in board.column_labels(false) {
        let _ = write!(out, "{:>3}", file);
    }
    out.push('\n');
    out
}
