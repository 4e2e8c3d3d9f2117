//! Bounded-width batched execution
//!
//! Multi-verse lookups run in waves of a fixed width rather than all at
//! once. Each wave settles completely before the next starts, and results
//! come back in input order.

use std::future::Future;

use futures::future::join_all;

/// Verses fetched concurrently per wave
pub const BATCH_WIDTH: usize = 5;

/// Map `items` through `op`, at most `width` in flight at a time.
///
/// Output order matches input order regardless of per-item completion
/// order within a wave.
pub async fn process_in_batches<I, T, F, Fut>(items: I, width: usize, op: F) -> Vec<T>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = T>,
{
    debug_assert!(width > 0);
    let mut results = Vec::new();
    let mut iter = items.into_iter();
    loop {
        let wave: Vec<_> = iter.by_ref().take(width).map(&op).collect();
        if wave.is_empty() {
            break;
        }
        results.extend(join_all(wave).await);
    }
    results
}
