//! Algebraic square notation: a file letter followed by a 1-based rank,
//! e.g. `b1`, `f7`, `k10` or the zero-padded `a01` used on wide boards.

use crate::board::Square;
use crate::error::NotationError;

/// Parses `text` into a square on a board of side `board_size`.
pub fn parse_square(text: &str, board_size: usize) -> Result<Square, NotationError> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }

    let len = text.chars().count();
    if len != 2 && len != 3 {
        return Err(NotationError::InvalidLength(text));
    }

    let mut chars = text.chars();
    let file = match chars.next() {
        Some(c @ 'a'..='z') => c,
        Some(c) => return Err(NotationError::InvalidFile(c)),
        None => return Err(NotationError::Empty),
    };

    let rank_text = chars.as_str();
    if !rank_text.chars().all(|c| c.is_ascii_digit()) {
        return Err(NotationError::InvalidRank(rank_text.to_string()));
    }
    let rank: i32 = match rank_text.parse() {
        Ok(rank) if rank >= 1 => rank,
        _ => return Err(NotationError::InvalidRank(rank_text.to_string())),
    };

    let col = (file as u8 - b'a') as i32;
    Ok(Square::new(rank - 1, col, board_size)?)
}

pub fn format_square(square: &Square) -> String {
    square.to_string()
}

impl Square {
    pub fn parse(text: &str, board_size: usize) -> Result<Self, NotationError> {
        parse_square(text, board_size)
    }
}
