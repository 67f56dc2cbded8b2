//! Benchmark workloads for the growarray capacity policy.
//!
//! Provides deterministic operation sequences for benchmarking and tests:
//!
//! - [`append_profile`]: pure pushes, exercising the growth path only
//! - [`churn_profile`]: mixed inserts and removals that cross both the
//!   growth and shrink thresholds repeatedly
//! - [`apply`]: replay a sequence against a [`GrowableArray`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growarray::GrowableArray;

/// A single array mutation in a benchmark workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append a value.
    Push(i32),
    /// Insert a value at a position derived from the current length.
    InsertAt(usize, i32),
    /// Remove the last element.
    RemoveLast,
    /// Remove at a position derived from the current length.
    RemoveAt(usize),
}

/// Build an append-only workload of `n` pushes.
pub fn append_profile(n: usize) -> Vec<Op> {
    (0..n).map(|i| Op::Push(i as i32)).collect()
}

/// Build a mixed workload of `n` operations.
///
/// Runs in waves of 64 operations that alternate between mostly-inserting
/// and mostly-removing, so capacity repeatedly grows and shrinks. Positions
/// are drawn from a simple hash of the seed and are reduced modulo the
/// array length at replay time.
pub fn churn_profile(n: usize, seed: u64) -> Vec<Op> {
    let mut state = seed;
    let mut ops = Vec::with_capacity(n);
    for i in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let r = (state >> 33) as usize;
        let filling = (i / 64) % 2 == 0;
        let op = match (filling, r % 4) {
            (true, 0) => Op::RemoveLast,
            (true, 1) => Op::InsertAt(r, i as i32),
            (true, _) => Op::Push(i as i32),
            (false, 0) => Op::Push(i as i32),
            (false, 1) => Op::RemoveLast,
            (false, _) => Op::RemoveAt(r),
        };
        ops.push(op);
    }
    ops
}

/// Replay `ops` against `array`.
///
/// Removals on an empty array are skipped. Returns the number of
/// operations that changed the array.
pub fn apply(array: &mut GrowableArray, ops: &[Op]) -> usize {
    let mut applied = 0;
    for &op in ops {
        let len = array.len();
        let changed = match op {
            Op::Push(v) => {
                array.push(v);
                true
            }
            Op::InsertAt(pos, v) => array.insert_at((pos % (len + 1)) as isize, v).is_ok(),
            Op::RemoveLast => array.remove_last().is_ok(),
            Op::RemoveAt(pos) => len > 0 && array.remove_at((pos % len) as isize).is_ok(),
        };
        if changed {
            applied += 1;
        }
    }
    applied
}
