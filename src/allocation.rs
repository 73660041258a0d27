//! Zerg allocation across the bases of a planet (zergrush).
//!
//! Each base offers a frontier of `(zerg, minerals)` points with strictly
//! increasing gain. For every combination of one frontier point per base, a
//! 0/1 knapsack picks the subset of bases to attack within the planet's zerg
//! budget. The combination with the highest total gain wins.

use itertools::Itertools;
use tracing::{debug, info};

use crate::gain::GainModel;
use crate::models::{Base, BaseSite, Planet, PlanetAllocation, TieBreak};

/// Builds the frontier of base `index`.
///
/// Bases that cannot yield a single mineral within `budget` produce no
/// points. Otherwise points start at the minimal feasible zerg count and
/// stop just before the first repeated gain.
///
/// # Example
///
/// ```
/// use puzzlers::allocation::generate_frontier;
/// use puzzlers::gain::GainModel;
/// use puzzlers::models::BaseSite;
///
/// let model = GainModel::default();
/// let site = BaseSite { terran_cost: 0, minerals: 100_000 };
/// let frontier = generate_frontier(&model, 0, &site, 5);
///
/// let points: Vec<_> = frontier.iter().map(|b| (b.resource, b.gain)).collect();
/// assert_eq!(points, vec![(0, 99_995), (1, 100_000)]);
/// ```
pub fn generate_frontier(model: &GainModel, index: usize, site: &BaseSite, budget: i64) -> Vec<Base> {
    if !model.feasible(site.minerals, site.terran_cost, budget) {
        debug!(index, "base cannot be taken within budget");
        return Vec::new();
    }
    let Some(mut resource) = model.minimal_feasible_resource(site.minerals, site.terran_cost) else {
        return Vec::new();
    };

    let mut frontier: Vec<Base> = Vec::new();
    loop {
        let gain = model.gain(site.minerals, site.terran_cost, resource);
        if frontier.last().is_some_and(|last| last.gain == gain) {
            break;
        }
        frontier.push(Base {
            index,
            resource,
            gain,
        });
        resource = resource.saturating_add(1);
    }
    frontier
}

/// Picks the subset of `items` with the highest total gain whose total
/// resource stays within `budget`.
///
/// An item is taken only when it strictly improves the best gain at a given
/// budget. Items are returned in reverse order of `items`.
///
/// # Example
///
/// ```
/// use puzzlers::allocation::optimize_knapsack;
/// use puzzlers::models::Base;
///
/// let items = [
///     Base { index: 0, resource: 3, gain: 30 },
///     Base { index: 1, resource: 2, gain: 25 },
///     Base { index: 2, resource: 2, gain: 20 },
/// ];
/// let picked = optimize_knapsack(&items, 4);
/// let indices: Vec<_> = picked.iter().map(|b| b.index).collect();
/// assert_eq!(indices, vec![2, 1]);
/// ```
pub fn optimize_knapsack(items: &[Base], budget: i64) -> Vec<Base> {
    if items.is_empty() || budget <= 0 {
        return Vec::new();
    }
    let capacity = budget as usize;

    // table[i][z]: best gain using the first i items and at most z resource
    let mut table = vec![vec![0i64; capacity + 1]; items.len() + 1];
    for (i, item) in items.iter().enumerate() {
        for z in 1..=capacity {
            let without = table[i][z];
            table[i + 1][z] = match usize::try_from(item.resource) {
                Ok(cost) if cost <= z => {
                    let with = item.gain.saturating_add(table[i][z - cost]);
                    if with > without {
                        with
                    } else {
                        without
                    }
                }
                _ => without,
            };
        }
    }

    let mut picked = Vec::new();
    let (mut i, mut z) = (items.len(), capacity);
    while i > 0 && z > 0 {
        if table[i][z] != table[i - 1][z] {
            let item = items[i - 1];
            picked.push(item);
            z -= item.resource as usize;
        }
        i -= 1;
    }
    picked
}

/// Finds the best allocation of one planet's zerg.
///
/// Every combination of one frontier point per feasible base is tried, the
/// first base varying fastest; each combination is ordered by
/// `(resource, gain)` before the knapsack runs.
pub fn solve_planet(model: &GainModel, planet: &Planet, tie_break: TieBreak) -> PlanetAllocation {
    let frontiers: Vec<Vec<Base>> = planet
        .bases
        .iter()
        .enumerate()
        .map(|(index, site)| generate_frontier(model, index, site, planet.budget))
        .filter(|frontier| !frontier.is_empty())
        .collect();

    if frontiers.is_empty() {
        debug!("no feasible base on planet");
        return PlanetAllocation::default();
    }
    debug!(
        feasible_bases = frontiers.len(),
        combinations = frontiers.iter().map(Vec::len).product::<usize>(),
        "searching frontier combinations"
    );

    let mut best: Option<PlanetAllocation> = None;
    let combinations = frontiers
        .iter()
        .rev()
        .map(|frontier| frontier.iter().copied())
        .multi_cartesian_product();

    for mut candidate in combinations {
        candidate.reverse();
        candidate.sort_by_key(|b| (b.resource, b.gain));
        let allocation = PlanetAllocation::from_bases(optimize_knapsack(&candidate, planet.budget));

        let replace = match &best {
            None => true,
            Some(current) => tie_break.prefers_higher(allocation.total_gain, current.total_gain),
        };
        if replace {
            best = Some(allocation);
        }
    }

    let best = best.unwrap_or_default();
    info!(
        resource = best.total_resource,
        gain = best.total_gain,
        bases = best.bases.len(),
        "planet allocation found"
    );
    best
}

/// Solves every planet independently, in input order.
pub fn solve_planets(model: &GainModel, planets: &[Planet], tie_break: TieBreak) -> Vec<PlanetAllocation> {
    planets
        .iter()
        .map(|planet| solve_planet(model, planet, tie_break))
        .collect()
}
