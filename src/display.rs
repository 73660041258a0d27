//! Output formatting for both solvers.
//!
//! The plain formats are the puzzles' expected answers; the JSON format
//! exposes the structured results.

use serde::Serialize;

use crate::models::{machine_number, MachineSelection, PlanetAllocation};

/// Formats a machine selection as two lines: the total price, then the
/// machine numbers each followed by a space.
///
/// # Example
///
/// ```
/// use puzzlers::display::format_selection;
/// use puzzlers::models::MachineSelection;
///
/// let selection = MachineSelection {
///     total_price: 15,
///     machines: vec!["M1".to_string(), "M2".to_string()],
/// };
/// assert_eq!(format_selection(&selection), "15\n1 2 ");
/// ```
pub fn format_selection(selection: &MachineSelection) -> String {
    let mut out = format!("{}\n", selection.total_price);
    for name in &selection.machines {
        match machine_number(name) {
            Some(number) => out.push_str(&number.to_string()),
            None => out.push_str(name),
        }
        out.push(' ');
    }
    out
}

/// Formats one planet: totals, then `index resource` pairs.
///
/// # Example
///
/// ```
/// use puzzlers::display::format_allocation;
/// use puzzlers::models::{Base, PlanetAllocation};
///
/// let allocation = PlanetAllocation::from_bases(vec![
///     Base { index: 2, resource: 3, gain: 40 },
///     Base { index: 0, resource: 1, gain: 10 },
/// ]);
/// assert_eq!(format_allocation(&allocation), "4 50\n0 1 2 3\n");
/// ```
pub fn format_allocation(allocation: &PlanetAllocation) -> String {
    let pairs = allocation
        .bases
        .iter()
        .map(|b| format!("{} {}", b.index, b.resource))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} {}\n{}\n",
        allocation.total_resource, allocation.total_gain, pairs
    )
}

/// Formats every planet, one after another.
pub fn format_allocations(allocations: &[PlanetAllocation]) -> String {
    allocations.iter().map(format_allocation).collect()
}

/// Pretty-printed JSON of any result.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Prints the facebull answer to stdout.
pub fn display_selection(selection: &MachineSelection) {
    println!("{}", format_selection(selection));
}

/// Prints the zergrush answer to stdout.
pub fn display_allocations(allocations: &[PlanetAllocation]) {
    print!("{}", format_allocations(allocations));
}
