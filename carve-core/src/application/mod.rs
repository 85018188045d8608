//! Application layer: the chunk partitioner and its execution over sentences

pub mod carving;
pub mod executor;
pub mod partition;

pub use carving::{carve_and_render, render_group, CarvingPlan, IndexGroup};
pub use executor::{ExecutionMode, ExecutorError, SentenceExecutor};
pub use partition::{
    chunk_length, partition_by_count, partition_by_length, Partition, PartitionOutcome,
};
