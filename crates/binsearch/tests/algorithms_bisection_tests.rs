#![cfg(feature = "dev")]
//! Tests for the bisection search.
//!
//! These tests verify the core search used by every host call:
//! - Hits return an index holding the target
//! - Misses return `-1 - insertion_point`
//! - Duplicates, single elements, and empty input
//! - Unordered (NaN) values terminate
//! - Instantiations over different numeric types agree
//!
//! ## Test Organization
//!
//! 1. **Documented Examples** - Fixed inputs with known results
//! 2. **Duplicates** - Tie behavior
//! 3. **Edge Cases** - Empty, extremes, NaN
//! 4. **Properties** - Seeded random sweeps
//! 5. **Outcome** - SearchOutcome decoding and helpers

use rand::prelude::*;

use binsearch::internals::algorithms::bisection::{SearchOutcome, locate, search};

// ============================================================================
// Helper Functions
// ============================================================================

/// Count elements strictly less than `target` by linear scan.
fn count_less<T: PartialOrd>(sequence: &[T], target: &T) -> usize {
    sequence.iter().filter(|v| *v < target).count()
}

/// Sorted sequence of `len` integers drawn from `lo..hi` (duplicates likely).
fn sorted_ints(rng: &mut StdRng, len: usize, lo: i64, hi: i64) -> Vec<i64> {
    let mut v: Vec<i64> = (0..len).map(|_| rng.random_range(lo..hi)).collect();
    v.sort_unstable();
    v
}

// ============================================================================
// Documented Example Tests
// ============================================================================

/// Test single-element sequences.
///
/// Verifies hit, miss below, and miss above.
#[test]
fn test_single_element() {
    let x = [5.0];

    assert_eq!(search(&x, 5.0), 0, "Exact match should return 0");
    assert_eq!(search(&x, 3.0), -1, "Below should insert at 0");
    assert_eq!(search(&x, 9.0), -2, "Above should insert at 1");
}

/// Test a miss between two elements.
///
/// Verifies that 4 inserts at position 2 in [1, 3, 5, 7, 9].
#[test]
fn test_boundary_example() {
    let x = [1.0, 3.0, 5.0, 7.0, 9.0];

    assert_eq!(search(&x, 4.0), -3);
}

/// Test every element of a distinct sequence is found at its own index.
#[test]
fn test_found_each_index() {
    let x = [1.0, 3.0, 5.0, 7.0, 9.0];

    for (i, &xi) in x.iter().enumerate() {
        assert_eq!(search(&x, xi), i as isize, "x[{}] should be found", i);
    }
}

/// Test every gap of a distinct sequence.
///
/// Verifies insertion points 0 through n.
#[test]
fn test_every_gap() {
    let x = [10, 20, 30, 40];

    assert_eq!(search(&x, 5), -1);
    assert_eq!(search(&x, 15), -2);
    assert_eq!(search(&x, 25), -3);
    assert_eq!(search(&x, 35), -4);
    assert_eq!(search(&x, 45), -5);
}

// ============================================================================
// Duplicate Tests
// ============================================================================

/// Test duplicates return one of the matching indices.
#[test]
fn test_duplicates_found() {
    let x = [1, 2, 2, 2, 3];
    let r = search(&x, 2);

    assert!((1..=3).contains(&r), "Index {} should be in 1..=3", r);
    assert_eq!(x[r as usize], 2);
}

/// Test that the tie is whichever element the first probe lands on.
///
/// The midpoint of [0, 5) is 2, which already holds the target.
#[test]
fn test_duplicates_first_probe() {
    let x = [1.0, 2.0, 2.0, 2.0, 3.0];

    assert_eq!(search(&x, 2.0), 2);
}

/// Test all-equal sequences.
#[test]
fn test_all_equal() {
    let x = [7_i32; 9];

    let r = search(&x, 7);
    assert!(r >= 0 && (r as usize) < x.len());
    assert_eq!(search(&x, 6), -1, "Below run should insert at 0");
    assert_eq!(search(&x, 8), -10, "Above run should insert at n");
}

/// Test misses next to a run of duplicates.
///
/// Verifies the insertion point counts every duplicate below the target.
#[test]
fn test_miss_after_duplicate_run() {
    let x = [1, 2, 2, 2, 5];

    assert_eq!(search(&x, 3), -5, "3 should insert after all 2s");
    assert_eq!(search(&x, 0), -1);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test an empty sequence does not index and reports insertion point 0.
#[test]
fn test_empty_sequence() {
    let x: [f64; 0] = [];

    assert_eq!(search(&x, 1.0), -1);
}

/// Test infinite targets land at the ends.
#[test]
fn test_infinite_targets() {
    let x = [-1.0_f64, 0.0, 1.0];

    assert_eq!(search(&x, f64::NEG_INFINITY), -1);
    assert_eq!(search(&x, f64::INFINITY), -4);
}

/// Test negative zero compares equal to positive zero.
#[test]
fn test_signed_zero() {
    let x = [-1.0_f64, 0.0, 1.0];

    assert_eq!(search(&x, -0.0), 1);
}

/// Test a NaN target terminates and reports not found.
///
/// The first probe is unordered, so the window stops at `low = 0`.
#[test]
fn test_nan_target_terminates() {
    let x = [1.0_f64, 2.0, 3.0];

    assert_eq!(search(&x, f64::NAN), -1);
    assert_eq!(search(&[1.0_f32, 2.0, 3.0], f32::NAN), -1);
}

/// Test a NaN element terminates and reports not found.
#[test]
fn test_nan_element_terminates() {
    let x = [1.0_f64, f64::NAN, 3.0];

    assert_eq!(search(&x, 3.0), -1, "Probe at NaN should stop the search");
}

/// Test a NaN probed after the window has moved keeps the current low.
#[test]
fn test_nan_element_late_probe() {
    let x = [1.0_f64, 2.0, 3.0, 4.0, f64::NAN];

    // probes: mid 2 (3.0 < 3.5) -> low 3; mid 4 (NaN) -> stop
    assert_eq!(search(&x, 3.5), -4);
}

/// Test unsorted input stays in bounds.
#[test]
fn test_unsorted_in_bounds() {
    let x = [9, 1, 8, 2, 7, 3];

    for t in -1..11 {
        let r = search(&x, t);
        if r >= 0 {
            assert_eq!(x[r as usize], t);
        } else {
            assert!((-1 - r) as usize <= x.len());
        }
    }
}

/// Test integer extremes.
#[test]
fn test_integer_extremes() {
    let x = [i64::MIN, -1, 0, 1, i64::MAX];

    assert_eq!(search(&x, i64::MIN), 0);
    assert_eq!(search(&x, i64::MAX), 4);
    assert_eq!(search(&x, i64::MIN + 1), -2);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test found and not-found properties over seeded random sequences.
///
/// For every target near the value range, a hit must hold the target and a
/// miss must encode the count of smaller elements.
#[test]
fn test_random_sweep_i64() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.random_range(1..64);
        let x = sorted_ints(&mut rng, len, -20, 20);

        for t in -22..22 {
            let r = search(&x, t);
            if x.contains(&t) {
                assert!(r >= 0, "{} is present in {:?}, got {}", t, x, r);
                assert_eq!(x[r as usize], t);
            } else {
                assert!(r < 0, "{} is absent from {:?}, got {}", t, x, r);
                let p = (-1 - r) as usize;
                assert_eq!(p, count_less(&x, &t), "insertion point for {}", t);
                assert!(p <= x.len());
            }
        }
    }
}

/// Test inserting at the reported insertion point keeps the sequence sorted.
#[test]
fn test_insertion_consistency() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let len = rng.random_range(1..32);
        let x: Vec<f64> = sorted_ints(&mut rng, len, 0, 50)
            .into_iter()
            .map(|v| v as f64 * 0.5)
            .collect();
        let target = rng.random_range(-2..52) as f64 * 0.5 + 0.25;

        let r = search(&x, target);
        assert!(r < 0, "Quarter offsets never match half steps");

        let mut inserted = x.clone();
        inserted.insert((-1 - r) as usize, target);
        assert!(
            inserted.windows(2).all(|w| w[0] <= w[1]),
            "Insertion at {} should keep {:?} sorted",
            -1 - r,
            inserted
        );
    }
}

/// Test that every numeric instantiation agrees on the same data.
#[test]
fn test_instantiations_agree() {
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..100 {
        let len = rng.random_range(1..40);
        let x64 = sorted_ints(&mut rng, len, -100, 100);
        let x32: Vec<i32> = x64.iter().map(|&v| v as i32).collect();
        let f64s: Vec<f64> = x64.iter().map(|&v| v as f64).collect();
        let f32s: Vec<f32> = x64.iter().map(|&v| v as f32).collect();

        for t in -101..101 {
            let expected = search(&x64, t);
            assert_eq!(search(&x32, t as i32), expected);
            assert_eq!(search(&f64s, t as f64), expected);
            assert_eq!(search(&f32s, t as f32), expected);
        }
    }
}

/// Test hits and misses on a 2^20-element sequence of even numbers.
#[test]
fn test_large_sequence() {
    let n = 1 << 20;
    let x: Vec<u32> = (0..n).map(|i| i * 2).collect();

    assert_eq!(search(&x, 0), 0);
    assert_eq!(search(&x, 2 * (n - 1)), (n - 1) as isize);
    assert_eq!(search(&x, 12_345), -1 - 6_173);
    assert_eq!(search(&x, 2 * n), -1 - n as isize);
}

// ============================================================================
// Outcome Tests
// ============================================================================

/// Test decoding hits and misses.
#[test]
fn test_outcome_decode() {
    assert_eq!(SearchOutcome::from_encoded(0), SearchOutcome::Found(0));
    assert_eq!(SearchOutcome::from_encoded(4), SearchOutcome::Found(4));
    assert_eq!(
        SearchOutcome::from_encoded(-1),
        SearchOutcome::NotFound { insertion_point: 0 }
    );
    assert_eq!(
        SearchOutcome::from_encoded(-3),
        SearchOutcome::NotFound { insertion_point: 2 }
    );
}

/// Test encoding is the inverse of decoding across the boundary values.
#[test]
fn test_outcome_encode_inverse() {
    for encoded in [-1000, -2, -1, 0, 1, 1000, isize::MIN, isize::MAX] {
        assert_eq!(SearchOutcome::from_encoded(encoded).encode(), Some(encoded));
    }
}

/// Test outcomes beyond the signed range do not encode.
#[test]
fn test_outcome_encode_out_of_range() {
    let limit = isize::MAX as usize;

    assert_eq!(
        SearchOutcome::NotFound { insertion_point: usize::MAX }.encode(),
        None
    );
    assert_eq!(
        SearchOutcome::NotFound { insertion_point: limit + 1 }.encode(),
        None
    );
    assert_eq!(SearchOutcome::Found(limit + 1).encode(), None);

    assert_eq!(
        SearchOutcome::NotFound { insertion_point: limit }.encode(),
        Some(isize::MIN)
    );
    assert_eq!(SearchOutcome::Found(limit).encode(), Some(isize::MAX));
}

/// Test locate and the outcome helpers.
#[test]
fn test_locate_helpers() {
    let x = [1.0, 3.0, 5.0, 7.0, 9.0];

    let hit = locate(&x, 7.0);
    assert!(hit.is_found());
    assert_eq!(hit.index(), Some(3));
    assert_eq!(hit.position(), 3);

    let miss = locate(&x, 4.0);
    assert!(!miss.is_found());
    assert_eq!(miss.index(), None);
    assert_eq!(miss.position(), 2);
}

/// Test outcome display.
#[test]
fn test_outcome_display() {
    assert_eq!(SearchOutcome::Found(3).to_string(), "found at index 3");
    assert_eq!(
        SearchOutcome::NotFound { insertion_point: 2 }.to_string(),
        "not found (insertion point 2)"
    );
}
