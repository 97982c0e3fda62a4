//! Command-line configuration.
//! `--default` and `--random` need no further input; otherwise both squares
//! must be given on the command line or the interactive shell asks for them.

use crate::board::{Board, DEFAULT_BOARD_SIZE};
use crate::error::NotationError;
use crate::notation::parse_square;
use crate::search::Query;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::Rng;
use std::ffi::OsString;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub use_default: bool,
    pub random: bool,
    pub size: Option<usize>,
    pub start: Option<String>,
    pub target: Option<String>,
    pub max_moves: Option<usize>,
    pub json: bool,
    pub verbose: bool,
}

pub fn command() -> Command {
    Command::new("knight-path")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shortest knight route between two squares of a square chessboard")
        .arg(
            Arg::new("default")
                .long("default")
                .help("Solve b1 to f7 on a standard 8x8 board")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["random", "size", "start", "target"]),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .help("Pick the start and target squares at random")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["start", "target"]),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("N")
                .help("Board side length, clamped to 4..=26")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("SQUARE")
                .help("Starting square in chess notation, e.g. b1"),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .value_name("SQUARE")
                .help("Target square in chess notation, e.g. f7"),
        )
        .arg(
            Arg::new("max-moves")
                .long("max-moves")
                .value_name("N")
                .help("Give up on routes longer than N moves")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print search statistics to stderr")
                .action(ArgAction::SetTrue),
        )
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            use_default: matches.get_flag("default"),
            random: matches.get_flag("random"),
            size: matches.get_one::<usize>("size").copied(),
            start: matches.get_one::<String>("start").cloned(),
            target: matches.get_one::<String>("target").cloned(),
            max_moves: matches.get_one::<usize>("max-moves").copied(),
            json: matches.get_flag("json"),
            verbose: matches.get_flag("verbose"),
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.size.unwrap_or(DEFAULT_BOARD_SIZE))
    }

    /// The query described by the arguments alone, or `None` when the
    /// squares still have to be asked for.
    pub fn query<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Query>, NotationError> {
        if self.use_default {
            return Ok(Some(Query::standard()));
        }

        let board = self.board();
        if self.random {
            let start = board.random_square(rng);
            let target = board.random_square(rng);
            return Ok(Some(Query::new(board, start, target)));
        }

        match (&self.start, &self.target) {
            (Some(start), Some(target)) => {
                let start = parse_square(start, board.size())?;
                let target = parse_square(target, board.size())?;
                Ok(Some(Query::new(board, start, target)))
            }
            _ => Ok(None),
        }
    }
}
