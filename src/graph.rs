//! Single-step transformation graph for the facebull solver.
//!
//! Chemicals are indexed `1..=N` and the graph keeps, for every ordered pair,
//! the machine offering the cheapest direct conversion.

use tracing::{debug, warn};

use crate::models::{Chemical, MachineCatalog, MachineEdge, MachineId, MAX_CHEMICAL};

/// Cheapest direct machine for every ordered pair of chemicals.
#[derive(Debug, Clone, Default)]
pub struct TransformGraph {
    chemical_count: usize,
    catalog: MachineCatalog,
    /// Row-major `N x N` table, `(source - 1) * N + (target - 1)`
    cheapest: Vec<Option<(MachineId, u64)>>,
}

impl TransformGraph {
    /// Highest chemical index seen in the input (N).
    pub fn chemical_count(&self) -> usize {
        self.chemical_count
    }

    pub fn catalog(&self) -> &MachineCatalog {
        &self.catalog
    }

    /// The machine kept for `source -> target`, if any.
    pub fn edge(&self, source: Chemical, target: Chemical) -> Option<MachineId> {
        self.slot(source, target)
            .and_then(|i| self.cheapest[i])
            .map(|(id, _)| id)
    }

    /// Number of ordered pairs with a direct machine.
    pub fn edge_count(&self) -> usize {
        self.cheapest.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.chemical_count == 0
    }

    fn slot(&self, source: Chemical, target: Chemical) -> Option<usize> {
        let n = self.chemical_count;
        if source == 0 || target == 0 || source > n || target > n {
            return None;
        }
        Some((source - 1) * n + (target - 1))
    }
}

/// Builds the cheapest single-step graph from a machine list.
///
/// A later edge replaces the kept one only when strictly cheaper, so ties
/// go to the machine listed first. Self-conversions are ignored, and so are
/// edges naming a chemical above [`MAX_CHEMICAL`].
///
/// # Example
///
/// ```
/// use puzzlers::graph::build_graph;
/// use puzzlers::models::MachineEdge;
///
/// let edge = |m: &str, s, t, p| MachineEdge { machine: m.to_string(), source: s, target: t, price: p };
/// let graph = build_graph(&[edge("M1", 1, 2, 10), edge("M2", 1, 2, 4), edge("M3", 2, 1, 5)]);
///
/// assert_eq!(graph.chemical_count(), 2);
/// let cheapest = graph.edge(1, 2).unwrap();
/// assert_eq!(graph.catalog().name(cheapest), "M2");
/// ```
pub fn build_graph(edges: &[MachineEdge]) -> TransformGraph {
    let in_range = |e: &&MachineEdge| e.source.max(e.target) <= MAX_CHEMICAL;
    let chemical_count = edges
        .iter()
        .filter(in_range)
        .map(|e| e.source.max(e.target))
        .max()
        .unwrap_or(0);

    let mut graph = TransformGraph {
        chemical_count,
        catalog: MachineCatalog::default(),
        cheapest: vec![None; chemical_count * chemical_count],
    };

    for edge in edges {
        if !in_range(&edge) {
            warn!(
                machine = %edge.machine,
                source = edge.source,
                target = edge.target,
                "chemical index out of range, edge ignored"
            );
            continue;
        }
        let id = graph.catalog.intern(&edge.machine, edge.price);
        if edge.source == edge.target {
            continue;
        }
        let Some(slot) = graph.slot(edge.source, edge.target) else {
            continue;
        };
        match graph.cheapest[slot] {
            Some((_, kept)) if edge.price >= kept => {}
            _ => graph.cheapest[slot] = Some((id, edge.price)),
        }
    }

    debug!(
        chemicals = graph.chemical_count,
        machines = graph.catalog.len(),
        pairs = graph.edge_count(),
        "built transformation graph"
    );
    graph
}
