use anyhow::{Context, Result};
use knight_path::config::Config;
use knight_path::render::render_path;
use knight_path::report::PathReport;
use knight_path::search::PathFinder;
use knight_path::shell::Shell;
use std::io;

fn main() -> Result<()> {
    let config = Config::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let query = match config
        .query(&mut rand::thread_rng())
        .context("Invalid square on the command line")?
    {
        Some(query) => query,
        None => Shell::new(io::stdin().lock(), io::stdout())
            .read_query()
            .context("Failed to read the board and squares")?,
    };

    if !config.json {
        println!("start = {}", query.start);
        println!("target = {}", query.target);
    }

    let mut finder = PathFinder::new();
    finder.set_max_moves(config.max_moves);

    if config.verbose {
        eprintln!(
            "searching {} board from {} to {} (move cap: {})",
            query.board,
            query.start,
            query.target,
            config
                .max_moves
                .map_or_else(|| "none".to_string(), |max| max.to_string())
        );
    }

    let path = finder
        .solve(&query)
        .context("Failed to find a knight path")?;

    if config.verbose {
        eprintln!(
            "expanded {} squares, path has {} moves",
            finder.nodes_expanded(),
            path.moves()
        );
    }

    if config.json {
        let report = PathReport::new(&query.board, &path);
        println!("{}", report.to_json().context("Failed to serialise the result")?);
    } else {
        print!("{}", render_path(&query.board, &path));
        println!("{} ({} moves)", path, path.moves());
    }

    Ok(())
}
