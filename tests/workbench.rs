//! Workbench, workload, and report integration

mod common;

use arborview::{workload, ComparisonReport, OpKind, StressOptions, Workbench, WorkloadError};
use common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn mirrored_session_keeps_both_trees_in_agreement() {
    let mut bench = Workbench::new();

    for value in [50, 30, 70, 20, 40, 60, 80] {
        assert!(bench.insert(value).agree());
    }
    assert!(bench.insert(50).agree()); // duplicate
    assert!(bench.delete(30).agree());
    assert!(bench.delete(30).agree()); // already gone

    let found = bench.find_path(60);
    assert!(found.bst.is_some() && found.avl.is_some());
    let missing = bench.find_path(31);
    assert!(missing.bst.is_none() && missing.avl.is_none());

    assert_search_order(bench.bst().root());
    assert_search_order(bench.avl().root());
    assert_avl_shape(bench.avl().root());

    // Same operations hit both recorders the same number of times.
    for kind in OpKind::ALL {
        assert_eq!(
            bench.bst().metrics().operation_count(kind),
            bench.avl().metrics().operation_count(kind),
            "{kind} counts diverged"
        );
    }
}

#[test]
fn stress_run_leaves_balanced_comparable_trees() {
    let mut bench = Workbench::new();
    let mut rng = StdRng::seed_from_u64(42);
    let options = StressOptions {
        insertions: 30,
        max_value: 500,
    };

    let outcome = workload::run_stress(&mut bench, &options, &mut rng).expect("range fits");

    assert_eq!(outcome.inserted.len(), 30);
    assert_search_order(bench.bst().root());
    assert_avl_shape(bench.avl().root());
    assert_eq!(
        in_order_values(bench.bst().root()),
        in_order_values(bench.avl().root())
    );

    let report = ComparisonReport::from_workbench(&bench);
    assert_eq!(report.bst.operations, 30);
    assert_eq!(report.avl.operations, 30);
    assert_eq!(report.bst.rotations, 0);
    assert!(report.avl.comparisons > 0);

    let rendered = report.to_string();
    assert!(rendered.contains("comparisons"));
    assert!(rendered.contains("µs"));
}

#[test]
fn stress_is_reproducible_under_a_fixed_seed() {
    let run = |seed: u64| {
        let mut bench = Workbench::new();
        let mut rng = StdRng::seed_from_u64(seed);
        workload::run_stress(&mut bench, &StressOptions::default(), &mut rng)
            .expect("default range fits")
            .inserted
    };

    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}

#[test]
fn stress_reports_an_impossible_request() {
    let mut bench = Workbench::new();
    let mut rng = StdRng::seed_from_u64(1);
    let options = StressOptions {
        insertions: 50,
        max_value: 10,
    };

    let err = workload::run_stress(&mut bench, &options, &mut rng).expect_err("cannot fit");
    assert!(matches!(err, WorkloadError::RangeTooSmall { .. }));
    assert!(!err.to_string().is_empty());
}

#[test]
fn insert_random_respects_existing_values() {
    let mut bench = Workbench::new();
    for value in 1..=3 {
        bench.insert(value);
    }
    let mut rng = StdRng::seed_from_u64(2);

    // Only 4 is left in the range.
    let value = workload::insert_random(&mut bench, 4, &mut rng).expect("one slot left");
    assert_eq!(value, 4);
}
