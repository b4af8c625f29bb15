//! Parallel fan-out of a spatial query over local shards.

use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{GeoShardError, Result};
use crate::index::SpatialIndex;
use crate::result::ScoredResult;
use crate::search::config::ShardSearchConfig;
use crate::search::executor::ShardQueryExecutor;
use crate::search::merger::merge_top_k;
use crate::search::query::SpatialQuery;
use crate::spatial::SpatialContext;

/// A shard that failed during a search.
#[derive(Debug)]
pub struct ShardFailure {
    /// Id of the failed shard.
    pub shard_index: i32,
    /// Why it failed.
    pub error: GeoShardError,
}

/// Merged outcome of a sharded search.
#[derive(Debug)]
pub struct ShardedSearchResults {
    /// Global top-k, highest score first.
    pub results: Vec<ScoredResult>,
    /// Shards that failed and contributed nothing.
    pub shard_failures: Vec<ShardFailure>,
}

impl ShardedSearchResults {
    /// Whether every shard answered.
    pub fn is_complete(&self) -> bool {
        self.shard_failures.is_empty()
    }
}

#[derive(Debug)]
struct Shard {
    shard_index: i32,
    index: Box<dyn SpatialIndex>,
}

/// Runs a [`SpatialQuery`] on every shard in parallel and merges the
/// per-shard results into one globally ranked top-k.
///
/// Shards share no mutable state; each worker reads only its own index.
pub struct ShardedSpatialSearcher {
    config: ShardSearchConfig,
    context: SpatialContext,
    shards: Vec<Shard>,
    thread_pool: ThreadPool,
}

impl ShardedSpatialSearcher {
    /// Create a searcher with no shards.
    pub fn new(config: ShardSearchConfig, context: SpatialContext) -> Result<Self> {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.effective_thread_count())
            .thread_name(|i| format!("geoshard-search-{i}"))
            .build()
            .map_err(|e| GeoShardError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            config,
            context,
            shards: Vec::new(),
            thread_pool,
        })
    }

    /// Register a shard. Shard ids must be unique.
    pub fn add_shard(&mut self, shard_index: i32, index: Box<dyn SpatialIndex>) -> Result<()> {
        if self.shards.iter().any(|s| s.shard_index == shard_index) {
            return Err(GeoShardError::invalid_argument(format!(
                "Shard {shard_index} is already registered"
            )));
        }
        self.shards.push(Shard { shard_index, index });
        Ok(())
    }

    /// Get the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Get the geometry context queries run with.
    pub fn context(&self) -> &SpatialContext {
        &self.context
    }

    /// Get the configuration.
    pub fn config(&self) -> &ShardSearchConfig {
        &self.config
    }

    /// Execute `query` on every shard and merge to the query's `k`.
    ///
    /// Invalid arguments and unparsable shapes fail before any shard runs.
    /// Shard failures are handled per
    /// [`ShardSearchConfig::allow_partial_results`].
    pub fn search(&self, query: &SpatialQuery) -> Result<ShardedSearchResults> {
        query.validate(&self.context)?;
        let start = Instant::now();

        let outcomes: Vec<(i32, Result<Vec<ScoredResult>>)> = self.thread_pool.install(|| {
            self.shards
                .par_iter()
                .map(|shard| {
                    let executor = ShardQueryExecutor::new(
                        shard.shard_index,
                        shard.index.as_ref(),
                        &self.context,
                    );
                    (shard.shard_index, executor.execute(query))
                })
                .collect()
        });

        let mut sequences = Vec::with_capacity(outcomes.len());
        let mut shard_failures = Vec::new();
        for (shard_index, outcome) in outcomes {
            match outcome {
                Ok(results) => sequences.push(results),
                Err(error) if self.config.allow_partial_results => {
                    warn!("shard {shard_index} failed, continuing without it: {error}");
                    shard_failures.push(ShardFailure { shard_index, error });
                }
                Err(error) => return Err(error),
            }
        }

        let results = merge_top_k(sequences, query.k());
        debug!(
            "{} over {} shards returned {} results in {:?} ({} failed)",
            query.description(),
            self.shards.len(),
            results.len(),
            start.elapsed(),
            shard_failures.len()
        );

        Ok(ShardedSearchResults {
            results,
            shard_failures,
        })
    }
}
