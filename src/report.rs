use crate::board::Board;
use crate::search::Path;
use serde::{Deserialize, Serialize};

/// Machine-readable result of one search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    pub board_size: usize,
    pub start: String,
    pub target: String,
    pub moves: usize,
    pub path: Vec<String>,
}

impl PathReport {
    pub fn new(board: &Board, path: &Path) -> Self {
        Self {
            board_size: board.size(),
            start: path.start().to_string(),
            target: path.target().to_string(),
            moves: path.moves(),
            path: path.squares().iter().map(|sq| sq.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
