//! # Puzzlers
//!
//! Two small batch puzzle solvers sharing one crate.
//!
//! - **facebull**: given machines that each convert one chemical into
//!   another for a price, find the cheapest set of machines that lets every
//!   chemical be converted into every other one.
//! - **zergrush**: given a zerg budget per planet and bases guarded by
//!   terrans, decide how many zerg to send to which bases to gather the most
//!   minerals.
//!
//! ## Modules
//!
//! - [`models`] - Shared data structures and the tie-break policy
//! - [`data`] - Input parsing and loading
//! - [`graph`] - Cheapest direct conversion per chemical pair
//! - [`paths`] - Multi-step path enumeration
//! - [`counter`] - Mixed-radix counter over Cartesian search spaces
//! - [`search`] - Cheapest machine combination search
//! - [`gain`] - Zerg gain model
//! - [`allocation`] - Per-base frontiers and knapsack allocation
//! - [`display`] - Output formatting
//! - [`wasm`] - WebAssembly bindings
//!
//! ## Example Usage
//!
//! ```
//! use puzzlers::{
//!     data::parse_machines,
//!     display::format_selection,
//!     graph::build_graph,
//!     models::TieBreak,
//!     paths::enumerate_paths,
//!     search::find_cheapest_combination,
//! };
//!
//! let edges = parse_machines("M1 C1 C2 10\nM2 C2 C1 5\n").unwrap();
//! let graph = build_graph(&edges);
//! let table = enumerate_paths(&graph);
//! let best = find_cheapest_combination(&graph, &table, TieBreak::KeepFirst);
//!
//! assert_eq!(format_selection(&best), "15\n1 2 ");
//! ```

pub mod allocation;
pub mod counter;
pub mod data;
pub mod display;
pub mod gain;
pub mod graph;
pub mod models;
pub mod paths;
pub mod search;
pub mod wasm;
