//! Tests for frontier generation and zerg allocation.

use puzzlers::allocation::{generate_frontier, optimize_knapsack, solve_planet, solve_planets};
use puzzlers::data::parse_planets;
use puzzlers::display::format_allocations;
use puzzlers::gain::GainModel;
use puzzlers::models::{Base, BaseSite, Planet, TieBreak};

fn site(terran_cost: i64, minerals: i64) -> BaseSite {
    BaseSite {
        terran_cost,
        minerals,
    }
}

fn base(index: usize, resource: i64, gain: i64) -> Base {
    Base {
        index,
        resource,
        gain,
    }
}

/// Best total gain over every subset of `items` within `budget`.
fn brute_force_gain(items: &[Base], budget: i64) -> i64 {
    let mut best = 0;
    for mask in 0u32..(1 << items.len()) {
        let chosen = items
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, item)| *item);
        let (resource, gain) = chosen.fold((0, 0), |(r, g), b| (r + b.resource, g + b.gain));
        if resource <= budget && gain > best {
            best = gain;
        }
    }
    best
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> i64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound) as i64
    }
}

#[test]
fn test_frontier_single_point() {
    let model = GainModel::default();
    let frontier = generate_frontier(&model, 3, &site(0, 100), 5);
    assert_eq!(frontier, vec![base(3, 0, 100)]);
}

#[test]
fn test_frontier_strictly_increasing() {
    let model = GainModel::default();
    for terran in 0..3 {
        for minerals in [5, 900, 20_000, 3_000_000] {
            let frontier = generate_frontier(&model, 0, &site(terran, minerals), 100);
            assert!(!frontier.is_empty());
            for pair in frontier.windows(2) {
                assert!(pair[1].gain > pair[0].gain);
                assert_eq!(pair[1].resource, pair[0].resource + 1);
            }
            let last = frontier.last().expect("non-empty");
            assert_eq!(last.gain, minerals);
        }
    }
}

#[test]
fn test_frontier_infeasible_within_budget() {
    let model = GainModel::default();
    // needs 3 zerg but only 2 are available
    assert!(generate_frontier(&model, 0, &site(1, 100), 2).is_empty());
    assert!(generate_frontier(&model, 0, &site(0, 1), 50).is_empty());
}

#[test]
fn test_knapsack_prefers_two_small_items() {
    let items = [base(0, 3, 30), base(1, 2, 25), base(2, 2, 20)];
    let picked = optimize_knapsack(&items, 4);
    let total: i64 = picked.iter().map(|b| b.gain).sum();
    assert_eq!(total, 45);
}

#[test]
fn test_knapsack_zero_budget() {
    let items = [base(0, 0, 30), base(1, 1, 25)];
    assert!(optimize_knapsack(&items, 0).is_empty());
}

#[test]
fn test_knapsack_free_item_taken() {
    let items = [base(0, 0, 30), base(1, 5, 25)];
    let picked = optimize_knapsack(&items, 1);
    assert_eq!(picked, vec![base(0, 0, 30)]);
}

#[test]
fn test_knapsack_matches_brute_force() {
    let mut rng = Lcg(42);
    for case in 0..60 {
        let count = 1 + (case % 10);
        let items: Vec<Base> = (0..count)
            .map(|i| base(i, rng.next(8), rng.next(50)))
            .collect();
        let budget = 1 + rng.next(20);

        let picked = optimize_knapsack(&items, budget);
        let used: i64 = picked.iter().map(|b| b.resource).sum();
        let gain: i64 = picked.iter().map(|b| b.gain).sum();

        assert!(used <= budget, "case {case}: over budget");
        assert_eq!(gain, brute_force_gain(&items, budget), "case {case}: {items:?}");
    }
}

#[test]
fn test_single_base_scenario() {
    let planets = parse_planets("1\n1 5\n0 100\n").expect("valid input");
    let allocations = solve_planets(&GainModel::default(), &planets, TieBreak::KeepFirst);
    assert_eq!(format_allocations(&allocations), "0 100\n0 0\n");
}

#[test]
fn test_planet_with_no_feasible_base() {
    let planet = Planet {
        budget: 2,
        bases: vec![site(1, 100), site(0, 1)],
    };
    let allocation = solve_planet(&GainModel::default(), &planet, TieBreak::KeepFirst);
    assert_eq!(allocation.total_gain, 0);
    assert!(allocation.bases.is_empty());
}

#[test]
fn test_planet_budget_limits_bases() {
    // each base needs 3 zerg; only two fit into 7
    let planet = Planet {
        budget: 7,
        bases: vec![site(1, 100), site(1, 300), site(1, 200)],
    };
    let allocation = solve_planet(&GainModel::default(), &planet, TieBreak::KeepFirst);
    assert_eq!(allocation.total_resource, 6);
    assert_eq!(allocation.total_gain, 500);
    let indices: Vec<_> = allocation.bases.iter().map(|b| b.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_planet_picks_frontier_point_per_base() {
    // a rich base has two frontier points; with budget 1 the optimizer can
    // afford the saturated point for it alone
    let planet = Planet {
        budget: 1,
        bases: vec![site(0, 1_000_000)],
    };
    let allocation = solve_planet(&GainModel::default(), &planet, TieBreak::KeepFirst);
    assert_eq!(allocation.total_gain, 1_000_000);
    assert_eq!(allocation.bases, vec![base(0, 1, 1_000_000)]);
}

#[test]
fn test_planets_solved_in_order() {
    let planets = parse_planets("2\n1 5\n0 100\n1 2\n1 100\n").expect("valid input");
    let allocations = solve_planets(&GainModel::default(), &planets, TieBreak::KeepFirst);
    assert_eq!(allocations.len(), 2);
    assert_eq!(allocations[0].total_gain, 100);
    assert_eq!(allocations[1].total_gain, 0);
}

#[test]
fn test_tie_break_picks_between_equal_combinations() {
    // frontiers are (2, 0), (3, 99995), (4, 100000) for both bases; with 7
    // zerg, (4, 3) and (3, 4) tie at 199995 and (4, 3) comes first
    let planet = Planet {
        budget: 7,
        bases: vec![site(1, 100_000), site(1, 100_000)],
    };
    let model = GainModel::default();
    let first = solve_planet(&model, &planet, TieBreak::KeepFirst);
    let last = solve_planet(&model, &planet, TieBreak::KeepLast);

    assert_eq!(first.total_gain, 199_995);
    assert_eq!(last.total_gain, 199_995);
    assert_eq!(first.bases, vec![base(0, 4, 100_000), base(1, 3, 99_995)]);
    assert_eq!(last.bases, vec![base(0, 3, 99_995), base(1, 4, 100_000)]);
}

#[test]
fn test_heavily_defended_base_is_skipped() {
    let planets = parse_planets("1\n1 5\n1000000000000000000 100\n").expect("valid input");
    let allocations = solve_planets(&GainModel::default(), &planets, TieBreak::KeepFirst);
    assert_eq!(allocations[0].total_gain, 0);
    assert!(allocations[0].bases.is_empty());
}
