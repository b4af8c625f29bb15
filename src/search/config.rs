//! Configuration for sharded spatial search.

use serde::{Deserialize, Serialize};

/// Configuration for [`ShardedSpatialSearcher`](crate::search::ShardedSpatialSearcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardSearchConfig {
    /// Thread pool size for per-shard execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Whether a failed shard contributes zero results (true) or fails the
    /// whole search (false).
    pub allow_partial_results: bool,
}

impl Default for ShardSearchConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: None,
            allow_partial_results: true,
        }
    }
}

impl ShardSearchConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thread pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set whether failed shards are tolerated.
    pub fn with_partial_results(mut self, allow: bool) -> Self {
        self.allow_partial_results = allow;
        self
    }

    /// Number of worker threads to start.
    pub fn effective_thread_count(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get).max(1)
    }
}
