//! Work partitioning across the fixed worker pool.

use std::ops::Range;

/// Half-open range of work items assigned to worker `id` out of `workers`.
///
/// Returns `[⌊id·total/workers⌋, min(⌊(id+1)·total/workers⌋, total))`.
/// For any `workers >= 1` the ranges of all workers are contiguous,
/// disjoint, and cover `[0, total)` exactly; when `total < workers` the
/// surplus workers receive empty ranges.
pub fn partition(total: usize, workers: usize, id: usize) -> Range<usize> {
    debug_assert!(workers >= 1);
    debug_assert!(id < workers);
    let start = (id as u64 * total as u64 / workers as u64) as usize;
    let end = ((id as u64 + 1) * total as u64 / workers as u64) as usize;
    start..end.min(total)
}
