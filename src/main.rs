use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use knight_pathfinding::{export, find_all_shortest_paths, render, Square};

/// Finds every minimum-length knight move sequence between two squares.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Starting square in algebraic notation, e.g. A1.
    start: String,
    /// Target square in algebraic notation, e.g. H8.
    end: String,
    /// Write a Graphviz DOT description of every shortest path.
    #[arg(long, value_name = "FILE")]
    graph: Option<PathBuf>,
    /// Write a PNG of the board with the first shortest path overlaid.
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start: Square = args.start.parse()?;
    let end: Square = args.end.parse()?;
    let result = find_all_shortest_paths(start, end)?;
    for path in result.paths() {
        println!("{}", path.iter().format(" -> "));
    }
    if let Some(file) = &args.graph {
        export::write_dot(&result, file)
            .with_context(|| format!("writing graph to {}", file.display()))?;
    }
    if let Some(file) = &args.image {
        if let Some(first) = result.paths().first() {
            render::write_png(first, file)
                .with_context(|| format!("writing image to {}", file.display()))?;
        }
    }
    Ok(())
}
