//! Async task execution strategies
//!
//! Three ways to drive a homogeneous batch of async operations: one at a
//! time in input order, in a bounded-concurrency batch, or threaded through
//! a composed pipeline of stages. The runner has no concept of task
//! failure, only of task completion: operations that can fail must fold
//! their failure into a fallback output (the lexicon client does exactly
//! that).

mod batch;
mod pipeline;
mod sequential;

pub use batch::{run_bounded, run_bounded_default};
pub use pipeline::Pipeline;
pub use sequential::{run_sequential, run_sequential_with_progress};
