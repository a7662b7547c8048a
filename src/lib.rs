//! # knight_pathfinding
//!
//! Computes every minimum-length knight move sequence between two squares of
//! the standard 8x8 chessboard. A breadth-first search from the source
//! assigns each square its move distance and records *all* predecessors
//! lying on some minimal sequence, after which every sequence to the target
//! is reconstructed by backtracking over the predecessor map. The
//! [export] module turns a result into a Graphviz DOT description of the
//! shortest-path graph and the [render] module draws the board with one
//! sequence overlaid.
//!
//! ```
//! use knight_pathfinding::{find_all_shortest_paths, Square};
//!
//! let a1: Square = "A1".parse().unwrap();
//! let b1: Square = "B1".parse().unwrap();
//! let result = find_all_shortest_paths(a1, b1).unwrap();
//! assert_eq!(result.distance(), 3);
//! assert_eq!(result.paths().len(), 2);
//! ```
pub mod board;
mod error;
pub mod export;
pub mod render;
pub mod search;


pub use board::{Square, BOARD_SIZE, KNIGHT_OFFSETS};
pub use error::{Error, Result};
pub use search::{find_all_shortest_paths, ShortestPaths};
