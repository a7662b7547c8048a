use std::fs;
use std::path::Path;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::info;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::board::Square;
use crate::error::Result;
use crate::search::ShortestPaths;

/// Builds the directed graph of every move used by some minimal sequence:
/// one node per square touched and one edge per (predecessor, successor)
/// pair, inserted in enumeration order. A zero-move result yields a single
/// node and no edges.
pub fn path_graph(paths: &ShortestPaths) -> DiGraph<Square, &'static str> {
    let mut graph = DiGraph::new();
    let mut nodes: IndexMap<Square, NodeIndex, FxBuildHasher> = IndexMap::default();
    for (from, to) in paths.edges() {
        let a = *nodes.entry(from).or_insert_with(|| graph.add_node(from));
        let b = *nodes.entry(to).or_insert_with(|| graph.add_node(to));
        graph.add_edge(a, b, "");
    }
    if graph.node_count() == 0 {
        graph.add_node(paths.source());
    }
    graph
}

/// Renders the shortest-path graph as Graphviz DOT text, nodes labelled in
/// algebraic notation and edge labels suppressed.
pub fn to_dot(paths: &ShortestPaths) -> String {
    let graph = path_graph(paths);
    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}

/// Writes the DOT description to a file, ready for a graph-layout tool.
pub fn write_dot<P: AsRef<Path>>(paths: &ShortestPaths, file: P) -> Result<()> {
    let file = file.as_ref();
    fs::write(file, to_dot(paths))?;
    info!("wrote shortest-path graph to {}", file.display());
    Ok(())
}
