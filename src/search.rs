use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info};
use smallvec::SmallVec;

use crate::board::Square;
use crate::error::{Error, Result};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// For each discovered square, every square one knight move away that lies
/// on some minimal sequence from the source (all at distance - 1).
type PredecessorSets = FxIndexMap<Square, SmallVec<[Square; 8]>>;

/// Every minimum-length knight move sequence between two squares, together
/// with the move count.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: Square,
    target: Square,
    distance: u32,
    paths: Vec<Vec<Square>>,
}

impl ShortestPaths {
    pub fn source(&self) -> Square {
        self.source
    }

    pub fn target(&self) -> Square {
        self.target
    }

    /// The minimum number of knight moves from source to target.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// All minimal sequences, each listing `distance + 1` squares from
    /// source to target, in enumeration order.
    pub fn paths(&self) -> &[Vec<Square>] {
        &self.paths
    }

    /// The deduplicated (from, to) move pairs used by any of the sequences,
    /// in enumeration order.
    pub fn edges(&self) -> Vec<(Square, Square)> {
        self.paths
            .iter()
            .flat_map(|path| path.iter().copied().tuple_windows())
            .unique()
            .collect()
    }
}

/// Finds the minimum knight move count between `source` and `target` and
/// reconstructs every sequence achieving it.
///
/// A level-order search from `source` assigns each square its distance and
/// accumulates all equal-distance predecessors, after which the sequences
/// are rebuilt by backtracking from `target`. Both maps live only for the
/// duration of the call, so concurrent queries need no synchronization.
pub fn find_all_shortest_paths(source: Square, target: Square) -> Result<ShortestPaths> {
    let (distances, predecessors) = all_shortest_predecessors(source, target);
    let Some(&distance) = distances.get(&target) else {
        return Err(Error::UnreachableTarget {
            from: source,
            to: target,
        });
    };
    let mut paths = Vec::new();
    let mut suffix = vec![target];
    backtrack(source, target, &predecessors, &mut suffix, &mut paths);
    info!(
        "{} minimal sequences of {} moves from {} to {}",
        paths.len(),
        distance,
        source,
        target
    );
    Ok(ShortestPaths {
        source,
        target,
        distance,
        paths,
    })
}

/// Breadth-first search over the knight move graph, one frontier layer per
/// iteration. A neighbour is either unvisited (gets the next distance and a
/// fresh predecessor set), at the next distance already (the current square
/// is one more predecessor), or settled at a smaller distance (ignored).
///
/// The target check sits between layers: the layer in which the target is
/// discovered is always expanded to completion, so predecessors reached
/// late in that same layer are still recorded.
fn all_shortest_predecessors(
    source: Square,
    target: Square,
) -> (FxIndexMap<Square, u32>, PredecessorSets) {
    let mut distances: FxIndexMap<Square, u32> = FxIndexMap::default();
    let mut predecessors = PredecessorSets::default();
    distances.insert(source, 0);
    let mut frontier = vec![source];
    let mut distance = 0;
    while !frontier.is_empty() && !distances.contains_key(&target) {
        distance += 1;
        let mut next = Vec::new();
        for &square in &frontier {
            for neighbour in square.knight_moves() {
                match distances.get(&neighbour) {
                    None => {
                        distances.insert(neighbour, distance);
                        predecessors.entry(neighbour).or_default().push(square);
                        next.push(neighbour);
                    }
                    Some(&d) if d == distance => {
                        predecessors.entry(neighbour).or_default().push(square);
                    }
                    Some(_) => {}
                }
            }
        }
        debug!("layer {distance}: {} squares", next.len());
        frontier = next;
    }
    (distances, predecessors)
}

/// Depth-first expansion of the predecessor relation, collecting one path
/// per branch. Predecessor distances strictly decrease towards the source,
/// so the recursion depth is bounded by the move count and no square can
/// repeat within a branch.
fn backtrack(
    source: Square,
    current: Square,
    predecessors: &PredecessorSets,
    suffix: &mut Vec<Square>,
    paths: &mut Vec<Vec<Square>>,
) {
    if current == source {
        let mut path = suffix.clone();
        path.reverse();
        paths.push(path);
        return;
    }
    let Some(preds) = predecessors.get(&current) else {
        return;
    };
    for &pred in preds {
        suffix.push(pred);
        backtrack(source, pred, predecessors, suffix, paths);
        suffix.pop();
    }
}
