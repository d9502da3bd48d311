//! Integration tests for the simulation driver and policy comparisons.
//!
//! These tests verify cross-policy behavior that per-policy unit tests
//! don't cover: the textbook scenarios, boundary capacities, and the
//! algebraic properties every policy must satisfy.

use pagesim::workload::random_reference_string;
use pagesim::{compare, run, Error, PageId, PolicyKind};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pids(ns: &[u32]) -> Vec<PageId> {
    ns.iter().map(|&n| PageId::new(n)).collect()
}

/// The Silberschatz reference string at capacity 3.
#[test]
fn test_textbook_scenario_capacity_three() {
    let reference = pids(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);

    assert_eq!(run(PolicyKind::Fifo, &reference, 3).unwrap(), 15);
    assert_eq!(run(PolicyKind::Lru, &reference, 3).unwrap(), 12);
    assert_eq!(run(PolicyKind::Opt, &reference, 3).unwrap(), 9);
}

/// A wider alphabet at capacity 4.
#[test]
fn test_scenario_capacity_four() {
    let reference = pids(&[4, 6, 4, 8, 6, 3, 6, 0, 5, 9, 2, 1, 0, 4, 6, 3, 0, 6, 8, 4]);

    assert_eq!(run(PolicyKind::Fifo, &reference, 4).unwrap(), 10);
    assert_eq!(run(PolicyKind::Lru, &reference, 4).unwrap(), 10);
    assert_eq!(run(PolicyKind::Opt, &reference, 4).unwrap(), 8);
}

/// OPT never loses to the realizable policies on another canned workload.
#[test]
fn test_opt_lower_bound_on_third_scenario() {
    let reference = pids(&[8, 1, 0, 7, 3, 0, 3, 4, 5, 3, 5, 2, 0, 6, 8, 4, 8, 1, 5, 3]);
    let result = compare(&reference, 3).unwrap();

    assert!(result.fifo >= result.opt);
    assert!(result.lru >= result.opt);
}

/// Capacity zero retains nothing, so every access faults.
#[test]
fn test_zero_capacity_faults_every_access() {
    let reference = pids(&[1, 1, 2, 2, 3, 3]);
    for kind in PolicyKind::ALL {
        assert_eq!(
            run(kind, &reference, 0).unwrap(),
            reference.len() as u64,
            "{kind}"
        );
    }
}

/// Negative capacity is a configuration error, not a fault count.
#[test]
fn test_negative_capacity_is_configuration_error() {
    let reference = pids(&[1, 2, 3]);
    for kind in PolicyKind::ALL {
        assert_eq!(
            run(kind, &reference, -2),
            Err(Error::NegativeCapacity(-2)),
            "{kind}"
        );
    }
    assert!(compare(&reference, -2).is_err());
}

/// The fault counter never decreases as the string is consumed, and
/// reading it does not perturb it.
#[test]
fn test_fault_count_is_monotonic_and_idempotent() {
    let reference = pids(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);

    for kind in PolicyKind::ALL {
        let mut policy = kind.build(3).unwrap();
        let mut previous = 0;

        for (i, &page) in reference.iter().enumerate() {
            policy.access(page, &reference[i + 1..]);
            let count = policy.fault_count();
            assert!(count >= previous, "{kind}: count dropped at access {i}");
            assert_eq!(count, policy.fault_count(), "{kind}: read perturbed count");
            previous = count;
        }
    }
}

/// A seeded synthetic workload runs through all policies and still obeys
/// the optimality bound.
#[test]
fn test_seeded_random_workload() {
    let mut rng = StdRng::seed_from_u64(0xBADC0FFE);
    let reference = random_reference_string(&mut rng, 200, 12);

    let result = compare(&reference, 5).unwrap();
    assert!(result.fifo >= result.opt);
    assert!(result.lru >= result.opt);

    // Same seed, fresh run: identical counts end to end.
    let mut rng = StdRng::seed_from_u64(0xBADC0FFE);
    let replay = random_reference_string(&mut rng, 200, 12);
    assert_eq!(compare(&replay, 5).unwrap(), result);
}

fn reference_strategy() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((0u32..10).prop_map(PageId::new), 0..64)
}

proptest! {
    /// OPT is optimal: neither realizable policy ever beats it.
    #[test]
    fn prop_opt_is_lower_bound(reference in reference_strategy(), capacity in 0i64..8) {
        let result = compare(&reference, capacity).unwrap();
        prop_assert!(result.fifo >= result.opt);
        prop_assert!(result.lru >= result.opt);
    }

    /// With room for the whole alphabet, every policy faults exactly once
    /// per distinct page.
    #[test]
    fn prop_large_capacity_faults_once_per_distinct_page(reference in reference_strategy()) {
        let distinct = reference
            .iter()
            .collect::<std::collections::BTreeSet<_>>()
            .len() as u64;

        for kind in PolicyKind::ALL {
            prop_assert_eq!(run(kind, &reference, 10).unwrap(), distinct);
        }
    }

    /// `run` is a pure function of its inputs.
    #[test]
    fn prop_run_is_deterministic(reference in reference_strategy(), capacity in 0i64..8) {
        for kind in PolicyKind::ALL {
            let first = run(kind, &reference, capacity).unwrap();
            let second = run(kind, &reference, capacity).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    /// No policy ever faults more than once per access, and every distinct
    /// page faults at least once (its first access is never resident).
    #[test]
    fn prop_fault_count_bounds(reference in reference_strategy(), capacity in 0i64..8) {
        let distinct = reference
            .iter()
            .collect::<std::collections::BTreeSet<_>>()
            .len() as u64;

        for kind in PolicyKind::ALL {
            let faults = run(kind, &reference, capacity).unwrap();
            prop_assert!(faults <= reference.len() as u64);
            prop_assert!(faults >= distinct);
        }
    }
}
