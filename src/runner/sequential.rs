//! Ordered sequential execution

use std::future::Future;

/// Run `op` on each item, one at a time, in input order.
///
/// The next invocation starts only after the previous one has resolved, so
/// `output[i]` always corresponds to `items[i]`. The runner yields back to
/// the scheduler between items; a long sequence never monopolizes the
/// executor thread and there is no recursion to grow the stack.
pub async fn run_sequential<T, U, F, Fut>(items: Vec<T>, op: F) -> Vec<U>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    run_sequential_with_progress(items, op, |_, _| {}).await
}

/// Like [`run_sequential`], invoking `progress` after every completed item
/// with `(remaining, completed)`.
pub async fn run_sequential_with_progress<T, U, F, Fut, P>(
    items: Vec<T>,
    mut op: F,
    mut progress: P,
) -> Vec<U>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
    P: FnMut(usize, usize),
{
    let total = items.len();
    let mut outputs = Vec::with_capacity(total);

    for item in items {
        let output = op(item).await;
        outputs.push(output);
        progress(total - outputs.len(), outputs.len());

        // Scheduling point between items
        tokio::task::yield_now().await;
    }

    outputs
}
