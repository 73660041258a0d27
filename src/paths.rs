//! Multi-step path enumeration over a [`TransformGraph`].
//!
//! Paths are built bottom-up by length. A path of length `l` from `j` to
//! `k` is a direct step `j -> g` followed by a length `l - 1` path from `g`
//! to `k`, for every intermediate `g != k`. Only the immediate target is
//! excluded, so for more than three chemicals a path may pass through the
//! same chemical twice.
//!
//! The table grows roughly as `N^4` times the paths per pair and is meant
//! for small chemical counts.

use tracing::debug;

use crate::graph::TransformGraph;
use crate::models::{Chemical, MachineId};

/// A concrete path: the machines used, in order.
pub type MachinePath = Vec<MachineId>;

/// Paths for every ordered pair and every length `1..=N`.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    chemical_count: usize,
    /// `levels[l - 1][pair]` holds the paths of length `l`
    levels: Vec<Vec<Vec<MachinePath>>>,
}

impl PathTable {
    /// Longest path length recorded (N).
    pub fn max_length(&self) -> usize {
        self.levels.len()
    }

    pub fn chemical_count(&self) -> usize {
        self.chemical_count
    }

    /// Paths of exactly `length` steps from `source` to `target`.
    pub fn paths(&self, source: Chemical, target: Chemical, length: usize) -> &[MachinePath] {
        let Some(pair) = pair_index(self.chemical_count, source, target) else {
            return &[];
        };
        match length.checked_sub(1).and_then(|l| self.levels.get(l)) {
            Some(level) => level[pair].as_slice(),
            None => &[],
        }
    }

    /// Every path from `source` to `target`, shortest first.
    pub fn candidates(&self, source: Chemical, target: Chemical) -> Vec<&[MachineId]> {
        (1..=self.max_length())
            .flat_map(|length| self.paths(source, target, length))
            .map(Vec::as_slice)
            .collect()
    }

    /// Ordered pairs `(j, k)` with `j != k`, in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (Chemical, Chemical)> {
        let n = self.chemical_count;
        (1..=n).flat_map(move |j| (1..=n).filter(move |&k| k != j).map(move |k| (j, k)))
    }

    /// Total number of recorded paths over every pair and length.
    pub fn path_count(&self) -> usize {
        self.levels.iter().flatten().map(Vec::len).sum()
    }
}

fn pair_index(n: usize, source: Chemical, target: Chemical) -> Option<usize> {
    if source == 0 || target == 0 || source > n || target > n {
        return None;
    }
    Some((source - 1) * n + (target - 1))
}

/// Enumerates paths of every length up to the chemical count.
///
/// The length-1 level is exactly the graph's direct edges.
///
/// # Example
///
/// ```
/// use puzzlers::graph::build_graph;
/// use puzzlers::models::MachineEdge;
/// use puzzlers::paths::enumerate_paths;
///
/// let edge = |m: &str, s, t, p| MachineEdge { machine: m.to_string(), source: s, target: t, price: p };
/// let graph = build_graph(&[edge("M1", 1, 2, 1), edge("M2", 2, 3, 1), edge("M3", 1, 3, 5)]);
/// let table = enumerate_paths(&graph);
///
/// assert_eq!(table.paths(1, 3, 1).len(), 1);
/// assert_eq!(table.paths(1, 3, 2).len(), 1);
/// assert_eq!(table.candidates(1, 3).len(), 2);
/// ```
pub fn enumerate_paths(graph: &TransformGraph) -> PathTable {
    let n = graph.chemical_count();
    let mut levels: Vec<Vec<Vec<MachinePath>>> = Vec::with_capacity(n);

    if n > 0 {
        let mut direct = vec![Vec::new(); n * n];
        for j in 1..=n {
            for k in 1..=n {
                if let Some(id) = graph.edge(j, k) {
                    direct[(j - 1) * n + (k - 1)].push(vec![id]);
                }
            }
        }
        levels.push(direct);
    }

    for length in 2..=n {
        let previous = &levels[length - 2];
        let mut current: Vec<Vec<MachinePath>> = vec![Vec::new(); n * n];

        for j in 1..=n {
            for k in (1..=n).filter(|&k| k != j) {
                let record = &mut current[(j - 1) * n + (k - 1)];
                for g in (1..=n).filter(|&g| g != k) {
                    let Some(first) = graph.edge(j, g) else {
                        continue;
                    };
                    for tail in &previous[(g - 1) * n + (k - 1)] {
                        let mut path = Vec::with_capacity(tail.len() + 1);
                        path.push(first);
                        path.extend_from_slice(tail);
                        if !record.contains(&path) {
                            record.push(path);
                        }
                    }
                }
            }
        }

        debug!(
            length,
            paths = current.iter().map(Vec::len).sum::<usize>(),
            "enumerated paths"
        );
        levels.push(current);
    }

    PathTable {
        chemical_count: n,
        levels,
    }
}
