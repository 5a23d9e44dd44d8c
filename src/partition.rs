//! Static partitioning of discovered files across the worker pool.
//!
//! The discovered path list is split into exactly `worker_count` contiguous
//! slices with boundaries at `floor(len * i / worker_count)`. Slices are
//! pairwise disjoint, collectively exhaustive, and preserve the original
//! order.

/// Splits `items` into `worker_count` contiguous, ordered work items.
///
/// When there are fewer items than workers, the trailing (and possibly some
/// interior) slices come out empty; those workers simply have nothing to do.
///
/// # Panics
///
/// Panics if `worker_count` is zero. The CLI validates `--jobs` before the
/// pipeline runs, so this only guards against programmer error.
pub fn partition<T>(items: Vec<T>, worker_count: usize) -> Vec<Vec<T>> {
    assert!(worker_count >= 1, "worker_count must be at least 1");

    let len = items.len();
    let mut slices = Vec::with_capacity(worker_count);
    let mut iter = items.into_iter();
    let mut start = 0;

    for i in 1..=worker_count {
        let end = len * i / worker_count;
        slices.push(iter.by_ref().take(end - start).collect());
        start = end;
    }

    slices
}
