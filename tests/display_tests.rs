//! Tests for output formatting.

use puzzlers::display::{format_allocation, format_allocations, format_json, format_selection};
use puzzlers::models::{Base, MachineSelection, PlanetAllocation};

#[test]
fn test_format_selection_uses_machine_numbers() {
    let selection = MachineSelection {
        total_price: 42,
        machines: vec!["M3".to_string(), "M10".to_string(), "M25".to_string()],
    };
    assert_eq!(format_selection(&selection), "42\n3 10 25 ");
}

#[test]
fn test_format_selection_empty() {
    let selection = MachineSelection {
        total_price: 0,
        machines: vec![],
    };
    assert_eq!(format_selection(&selection), "0\n");
}

#[test]
fn test_format_selection_name_without_digits() {
    let selection = MachineSelection {
        total_price: 1,
        machines: vec!["press".to_string()],
    };
    assert_eq!(format_selection(&selection), "1\npress ");
}

#[test]
fn test_format_allocation_empty_planet() {
    assert_eq!(format_allocation(&PlanetAllocation::default()), "0 0\n\n");
}

#[test]
fn test_format_allocations_concatenates_planets() {
    let first = PlanetAllocation::from_bases(vec![Base { index: 0, resource: 0, gain: 100 }]);
    let second = PlanetAllocation::from_bases(vec![
        Base { index: 1, resource: 3, gain: 40 },
        Base { index: 0, resource: 2, gain: 9 },
    ]);
    assert_eq!(
        format_allocations(&[first, second]),
        "0 100\n0 0\n5 49\n0 2 1 3\n"
    );
}

#[test]
fn test_format_json_selection() {
    let selection = MachineSelection {
        total_price: 15,
        machines: vec!["M1".to_string(), "M2".to_string()],
    };
    let json = format_json(&selection).expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["total_price"], 15);
    assert_eq!(value["machines"][1], "M2");
}
