//! Linear composition of async stages

use futures::future::BoxFuture;
use std::future::Future;

type Stage<T> = Box<dyn Fn(T) -> BoxFuture<'static, T> + Send + Sync>;

/// A linear pipeline of async stages over one value type.
///
/// `run` threads a single value through every stage in order; stage i's
/// output becomes stage i+1's input. A pipeline with zero stages is the
/// identity.
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
}

impl<T: Send + 'static> Pipeline<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the pipeline
    pub fn stage<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.stages.push(Box::new(move |input| Box::pin(f(input))));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Thread `input` through every stage in order
    pub async fn run(&self, input: T) -> T {
        let mut value = input;
        for stage in &self.stages {
            value = stage(value).await;
        }
        value
    }
}

impl<T: Send + 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
