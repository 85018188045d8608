//! Runs a partition function over every sentence of a document

use super::partition::Partition;
use crate::domain::SentenceArtifact;
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::Arc;

/// Execution errors
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The worker pool could not be started
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One sentence after another on the calling thread
    Sequential,
    /// Sentences spread over a rayon pool
    Parallel,
}

/// Chunks sentences sequentially or in parallel, always returning results
/// in sentence order
#[derive(Debug, Clone)]
pub struct SentenceExecutor {
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
    parallel_threshold: usize,
}

impl SentenceExecutor {
    /// Sequential executor
    pub fn sequential() -> Self {
        Self {
            #[cfg(feature = "parallel")]
            pool: None,
            parallel_threshold: usize::MAX,
        }
    }

    /// Executor going parallel once a document has more than
    /// `parallel_threshold` sentences
    ///
    /// `threads` sizes a dedicated pool; `None` uses rayon's global pool.
    #[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
    pub fn new(threads: Option<usize>, parallel_threshold: usize) -> Result<Self, ExecutorError> {
        #[cfg(feature = "parallel")]
        let pool = match threads {
            Some(count) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .thread_name(|i| format!("carve-{i}"))
                    .build()
                    .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?,
            )),
            None => None,
        };

        Ok(Self {
            #[cfg(feature = "parallel")]
            pool,
            parallel_threshold,
        })
    }

    /// Mode used for a document with `sentence_count` sentences
    pub fn mode(&self, sentence_count: usize) -> ExecutionMode {
        if cfg!(feature = "parallel") && sentence_count > self.parallel_threshold {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Apply `partition` to every artifact
    pub fn run<F>(&self, artifacts: &[SentenceArtifact], partition: F) -> Vec<Partition>
    where
        F: Fn(&SentenceArtifact) -> Partition + Send + Sync,
    {
        match self.mode(artifacts.len()) {
            ExecutionMode::Sequential => artifacts.iter().map(partition).collect(),
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                let work = || artifacts.par_iter().map(&partition).collect::<Vec<_>>();
                match &self.pool {
                    Some(pool) => pool.install(work),
                    None => work(),
                }
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => artifacts.iter().map(partition).collect(),
        }
    }
}

impl Default for SentenceExecutor {
    fn default() -> Self {
        Self::sequential()
    }
}
