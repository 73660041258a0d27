//! Data models and structures for the puzzle solvers.
//!
//! This module contains the core data structures shared between parsing,
//! solving and output: the machine graph inputs of the facebull solver,
//! the base/planet inputs of the zergrush solver, and the structured
//! results both of them return.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A chemical identifier in `[1, N]`.
pub type Chemical = usize;

/// Largest chemical index accepted; the graph and path tables are `N x N`.
pub const MAX_CHEMICAL: Chemical = 4096;

/// A single conversion offered by a machine.
///
/// # Example
///
/// ```
/// use puzzlers::models::MachineEdge;
///
/// let edge = MachineEdge {
///     machine: "M1".to_string(),
///     source: 1,
///     target: 2,
///     price: 10,
/// };
/// assert_eq!(edge.machine_number(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineEdge {
    /// Machine name as written in the input (e.g. "M7")
    pub machine: String,
    /// Chemical the machine consumes
    pub source: Chemical,
    /// Chemical the machine produces
    pub target: Chemical,
    /// Price paid once for the machine, however many paths use it
    pub price: u64,
}

impl MachineEdge {
    /// Numeric part of the machine name, if it has one.
    pub fn machine_number(&self) -> Option<u64> {
        machine_number(&self.machine)
    }
}

/// Extracts the digits of a machine name ("M12" -> 12).
pub fn machine_number(name: &str) -> Option<u64> {
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Dense index of a machine inside a [`MachineCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MachineId(pub usize);

/// Interned machine names and their prices.
#[derive(Debug, Clone, Default)]
pub struct MachineCatalog {
    names: Vec<String>,
    prices: Vec<u64>,
    index: HashMap<String, MachineId>,
}

impl MachineCatalog {
    /// Registers a machine and returns its id.
    ///
    /// Listing the same machine again updates its price; the last listed
    /// price wins.
    pub fn intern(&mut self, name: &str, price: u64) -> MachineId {
        if let Some(&id) = self.index.get(name) {
            if self.prices[id.0] != price {
                warn!(
                    machine = name,
                    old = self.prices[id.0],
                    new = price,
                    "machine listed with different prices, keeping the last one"
                );
                self.prices[id.0] = price;
            }
            return id;
        }
        let id = MachineId(self.names.len());
        self.names.push(name.to_string());
        self.prices.push(price);
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn name(&self, id: MachineId) -> &str {
        &self.names[id.0]
    }

    pub fn price(&self, id: MachineId) -> u64 {
        self.prices[id.0]
    }

    pub fn get(&self, name: &str) -> Option<MachineId> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Policy for choosing between equally good solutions found during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The first solution found stays (strict comparison)
    #[default]
    KeepFirst,
    /// A later equal solution replaces the current one
    KeepLast,
}

impl TieBreak {
    /// Whether `candidate` should replace `best` when smaller is better.
    pub fn prefers_lower<T: PartialOrd>(self, candidate: T, best: T) -> bool {
        match self {
            TieBreak::KeepFirst => candidate < best,
            TieBreak::KeepLast => candidate <= best,
        }
    }

    /// Whether `candidate` should replace `best` when larger is better.
    pub fn prefers_higher<T: PartialOrd>(self, candidate: T, best: T) -> bool {
        match self {
            TieBreak::KeepFirst => candidate > best,
            TieBreak::KeepLast => candidate >= best,
        }
    }
}

/// The cheapest machine set found by the facebull search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineSelection {
    /// Sum of the prices of every distinct selected machine
    pub total_price: u64,
    /// Selected machine names, ordered by their numeric part
    pub machines: Vec<String>,
}

/// One base of a planet as read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSite {
    /// Defensive strength of the terran base
    pub terran_cost: i64,
    /// Minerals available at the base
    pub minerals: i64,
}

/// A planet: its zerg budget and its bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Zerg units available on this planet
    pub budget: i64,
    pub bases: Vec<BaseSite>,
}

/// A frontier point: sending `resource` zerg to base `index` yields `gain` minerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base {
    /// 0-based position of the base in its planet
    pub index: usize,
    /// Zerg units assigned
    pub resource: i64,
    /// Minerals gained
    pub gain: i64,
}

/// The best allocation found for one planet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlanetAllocation {
    pub total_resource: i64,
    pub total_gain: i64,
    /// Selected bases ordered by index
    pub bases: Vec<Base>,
}

impl PlanetAllocation {
    /// Builds an allocation from selected bases, computing the totals.
    pub fn from_bases(mut bases: Vec<Base>) -> Self {
        bases.sort_by_key(|b| b.index);
        PlanetAllocation {
            total_resource: bases.iter().map(|b| b.resource).sum(),
            total_gain: bases.iter().fold(0i64, |total, b| total.saturating_add(b.gain)),
            bases,
        }
    }
}
