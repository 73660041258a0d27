//! Exhaustive search for the cheapest machine set (facebull).
//!
//! Every ordered pair of chemicals must be connected by one of its recorded
//! paths. The search tries every combination of path choices and keeps the
//! one whose union of machines has the lowest total price, each distinct
//! machine being paid for once. The number of combinations is the product
//! of the per-pair path counts, so this is only practical for small inputs.

use tracing::{debug, info, warn};

use crate::counter::MixedRadixCounter;
use crate::graph::TransformGraph;
use crate::models::{machine_number, MachineCatalog, MachineId, MachineSelection, TieBreak};
use crate::paths::PathTable;

/// Path choices of one ordered pair.
struct PairChoices<'a> {
    paths: Vec<&'a [MachineId]>,
}

/// Total price of the distinct machines used by one assignment.
///
/// `used` is scratch space sized to the catalog and is left cleared. The
/// total saturates at `u64::MAX`.
fn assignment_price(
    catalog: &MachineCatalog,
    pairs: &[PairChoices<'_>],
    assignment: &[usize],
    used: &mut [bool],
) -> u64 {
    let mut total: u64 = 0;
    let mut touched = Vec::new();
    for (pair, &choice) in pairs.iter().zip(assignment) {
        for &id in pair.paths[choice] {
            if !used[id.0] {
                used[id.0] = true;
                touched.push(id);
                total = total.saturating_add(catalog.price(id));
            }
        }
    }
    for id in touched {
        used[id.0] = false;
    }
    total
}

/// Orders machine names by their numeric part, names without digits last.
pub fn sort_machine_names(names: &mut [String]) {
    names.sort_by(|a, b| {
        let key = |name: &str| (machine_number(name).is_none(), machine_number(name));
        key(a.as_str())
            .cmp(&key(b.as_str()))
            .then_with(|| a.cmp(b))
    });
}

/// Finds the cheapest set of machines connecting every ordered pair.
///
/// Pairs without any path cannot be satisfied and are left out of the
/// search. With no satisfiable pair the result is an empty, free selection.
///
/// # Example
///
/// ```
/// use puzzlers::graph::build_graph;
/// use puzzlers::models::{MachineEdge, TieBreak};
/// use puzzlers::paths::enumerate_paths;
/// use puzzlers::search::find_cheapest_combination;
///
/// let edge = |m: &str, s, t, p| MachineEdge { machine: m.to_string(), source: s, target: t, price: p };
/// let graph = build_graph(&[edge("M1", 1, 2, 10), edge("M2", 2, 1, 5)]);
/// let table = enumerate_paths(&graph);
///
/// let best = find_cheapest_combination(&graph, &table, TieBreak::KeepFirst);
/// assert_eq!(best.total_price, 15);
/// assert_eq!(best.machines, vec!["M1", "M2"]);
/// ```
pub fn find_cheapest_combination(
    graph: &TransformGraph,
    table: &PathTable,
    tie_break: TieBreak,
) -> MachineSelection {
    let catalog = graph.catalog();

    let mut pairs = Vec::new();
    for (source, target) in table.pairs() {
        let paths = table.candidates(source, target);
        if paths.is_empty() {
            warn!(source, target, "no path between chemicals, pair skipped");
            continue;
        }
        pairs.push(PairChoices { paths });
    }

    let radices: Vec<usize> = pairs.iter().map(|p| p.paths.len()).collect();
    let mut counter = MixedRadixCounter::new(&radices);
    debug!(
        pairs = pairs.len(),
        combinations = ?counter.state_count(),
        "searching path combinations"
    );

    let mut used = vec![false; catalog.len()];
    let mut best_assignment = counter.values();
    let mut best_price = assignment_price(catalog, &pairs, &best_assignment, &mut used);

    loop {
        let assignment = counter.values();
        let price = assignment_price(catalog, &pairs, &assignment, &mut used);
        if tie_break.prefers_lower(price, best_price) {
            best_price = price;
            best_assignment = assignment;
        }
        if counter.advance() {
            break;
        }
    }

    let mut selected: Vec<MachineId> = pairs
        .iter()
        .zip(&best_assignment)
        .flat_map(|(pair, &choice)| pair.paths[choice].iter().copied())
        .collect();
    selected.sort();
    selected.dedup();

    let mut machines: Vec<String> = selected
        .into_iter()
        .map(|id| catalog.name(id).to_string())
        .collect();
    sort_machine_names(&mut machines);

    info!(price = best_price, machines = machines.len(), "cheapest combination found");
    MachineSelection {
        total_price: best_price,
        machines,
    }
}
