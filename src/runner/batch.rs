//! Bounded-concurrency batch execution

use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::VecDeque;
use std::future::Future;

use crate::config::DEFAULT_MAX_CONCURRENCY;

/// Run `op` over `items` with at most `max_concurrency` invocations in
/// flight at once.
///
/// As soon as one invocation resolves, the next queued item is started.
/// Returns once every started invocation has resolved and no items remain.
///
/// Output order is completion order, NOT input order. Callers that need
/// positional correspondence with the input must use
/// [`run_sequential`](super::run_sequential) instead.
pub async fn run_bounded<T, U, F, Fut>(items: Vec<T>, mut op: F, max_concurrency: usize) -> Vec<U>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    let limit = max_concurrency.max(1);
    let mut queue: VecDeque<T> = items.into();
    let mut outputs = Vec::with_capacity(queue.len());
    let mut in_flight = FuturesUnordered::new();

    while in_flight.len() < limit {
        match queue.pop_front() {
            Some(item) => in_flight.push(op(item)),
            None => break,
        }
    }

    while let Some(output) = in_flight.next().await {
        outputs.push(output);
        if let Some(item) = queue.pop_front() {
            in_flight.push(op(item));
        }
    }

    outputs
}

/// [`run_bounded`] with the default concurrency ceiling
pub async fn run_bounded_default<T, U, F, Fut>(items: Vec<T>, op: F) -> Vec<U>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    run_bounded(items, op, DEFAULT_MAX_CONCURRENCY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn in_flight_never_exceeds_ceiling() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let out = run_bounded(
            (0..20u64).collect(),
            |n| {
                let active = Arc::clone(&active);
                let peak = Arc::clone(&peak);
                async move {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    sleep(Duration::from_millis(1 + n % 7)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    n
                }
            },
            4,
        )
        .await;

        assert_eq!(out.len(), 20);
        assert!(peak.load(Ordering::SeqCst) <= 4);
        assert_eq!(active.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn output_is_completion_order() {
        let out = run_bounded(
            vec![30u64, 10, 20],
            |ms| async move {
                sleep(Duration::from_millis(ms)).await;
                ms
            },
            3,
        )
        .await;
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[tokio::test(start_paused = true)]
    async fn ceiling_of_one_degenerates_to_input_order() {
        let out = run_bounded(
            vec![5u64, 1, 3],
            |ms| async move {
                sleep(Duration::from_millis(ms)).await;
                ms
            },
            1,
        )
        .await;
        assert_eq!(out, vec![5, 1, 3]);
    }

    #[tokio::test]
    async fn zero_ceiling_is_clamped() {
        let out = run_bounded(vec![1u32, 2], |n| async move { n }, 0).await;
        assert_eq!(out.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn default_ceiling_is_four() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        run_bounded_default((0..12u64).collect(), |n| {
            let active = Arc::clone(&active);
            let peak = Arc::clone(&peak);
            async move {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                sleep(Duration::from_millis(2)).await;
                active.fetch_sub(1, Ordering::SeqCst);
                n
            }
        })
        .await;

        assert_eq!(peak.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn empty_input_completes() {
        let out: Vec<u32> = run_bounded(Vec::new(), |n: u32| async move { n }, 4).await;
        assert!(out.is_empty());
    }
}
