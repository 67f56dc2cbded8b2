//! End-to-end scenarios exercising growth, shifting and shrinking together.

use growarray::{ArrayConfig, ArrayError, GrowableArray};
use simplelog::{Config, LevelFilter, TestLogger};

// ── Helpers ─────────────────────────────────────────────────────

/// Route reallocation logs through the test harness's captured output.
fn init_logging() {
    // Already installed by another test in this binary is fine.
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn default_array_grow_remove_pop() {
    init_logging();
    let mut a = GrowableArray::new();
    assert_eq!((a.len(), a.capacity()), (0, 3));

    a.push(1);
    a.push(2);
    a.push(3);
    assert_eq!((a.len(), a.capacity()), (3, 3));

    a.push(4);
    assert_eq!((a.len(), a.capacity()), (4, 6));
    assert_eq!(a.snapshot_occupied(), vec![1, 2, 3, 4]);

    a.remove_at(1).unwrap();
    assert_eq!(a.snapshot_occupied(), vec![1, 3, 4]);
    assert_eq!((a.len(), a.capacity()), (3, 6));

    assert_eq!(a.remove_last(), Ok(4));
    assert_eq!(a.snapshot_occupied(), vec![1, 3]);
    assert_eq!((a.len(), a.capacity()), (2, 6));
}

#[test]
fn shrink_takes_a_single_step() {
    init_logging();
    let mut a = GrowableArray::with_capacity(20).unwrap();
    a.push(1);
    assert_eq!(a.len(), 1);
    a.remove_last().unwrap();
    assert_eq!(a.capacity(), 10);
    assert!(a.is_empty());
}

#[test]
fn index_of_finds_first_or_nothing() {
    let a: GrowableArray = [5, 10, 15].into_iter().collect();
    assert_eq!(a.index_of(10), Some(1));
    assert_eq!(a.index_of(99), None);
}

#[test]
fn rendering_matches_bracket_format() {
    let mut a = GrowableArray::new();
    assert_eq!(a.to_string(), "[ ]");
    a.extend([7, 8]);
    assert_eq!(a.to_string(), "[7, 8]");
}

#[test]
fn boundary_indices() {
    let mut a: GrowableArray = [1, 2, 3].into_iter().collect();
    let len = a.len() as isize;

    assert!(matches!(
        a.get(len),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        a.get(-1),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        a.insert_at(len + 2, 0),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));

    a.insert_at(len, 4).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    assert!(a.insert_at(a.len() as isize + 1, 5).is_err());
}

#[test]
fn copy_survives_source_mutation() {
    let mut a: GrowableArray = (1..=5).collect();
    let b = GrowableArray::copy_of(Some(&a)).unwrap();
    assert_eq!(a, b);

    while a.remove_last().is_ok() {}
    assert!(a.is_empty());
    assert_eq!(b.as_slice(), &[1, 2, 3, 4, 5]);
    assert_ne!(a, b);
}

#[test]
fn fill_then_drain_shrinks_back_down() {
    init_logging();
    let mut a = GrowableArray::new();
    a.extend(0..100);
    assert_eq!(a.capacity(), 192);

    let mut capacities = Vec::new();
    while !a.is_empty() {
        a.remove_at(0).unwrap();
        assert!(a.capacity() >= a.len());
        if capacities.last() != Some(&a.capacity()) {
            capacities.push(a.capacity());
        }
    }
    // Each step is a single halving of the previous capacity.
    for pair in capacities.windows(2) {
        assert_eq!(pair[1], pair[0] / 2);
    }
    assert_eq!(a.remove_last(), Err(ArrayError::EmptyContainer));
}

#[test]
fn zero_capacity_array_still_accepts_pushes() {
    init_logging();
    let mut a = GrowableArray::with_capacity(0).unwrap();
    for v in 0..10 {
        a.push(v);
    }
    assert_eq!(a.as_slice(), &(0..10).collect::<Vec<_>>()[..]);
    assert!(a.capacity() >= 10);
}

#[test]
fn custom_policy_changes_thresholds() {
    let config = ArrayConfig {
        initial_capacity: 8,
        growth_factor: 4,
        shrink_threshold: 2,
    };
    let mut a = GrowableArray::with_config(config).unwrap();
    a.extend(0..9);
    assert_eq!(a.capacity(), 32);

    // 32 > 2 * 8 halves once.
    a.remove_last().unwrap();
    assert_eq!(a.capacity(), 16);
    // 16 > 2 * 7 halves again.
    a.remove_last().unwrap();
    assert_eq!(a.capacity(), 8);
    // 8 > 2 * 6 does not.
    a.remove_last().unwrap();
    assert_eq!(a.capacity(), 8);
}
