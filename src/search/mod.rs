//! Shard query execution and cross-shard merging.
//!
//! This module provides functionality to:
//! - Describe a spatial query ([`SpatialQuery`])
//! - Execute it against one shard ([`ShardQueryExecutor`])
//! - Merge per-shard results into a global top-k ([`merge_top_k`])
//! - Fan a query out over many local shards in parallel
//!   ([`ShardedSpatialSearcher`])

pub mod config;
pub mod engine;
pub mod executor;
pub mod merger;
pub mod query;

pub use config::ShardSearchConfig;
pub use engine::{ShardFailure, ShardedSearchResults, ShardedSpatialSearcher};
pub use executor::ShardQueryExecutor;
pub use merger::{merge_top_k, merge_top_k_by};
pub use query::SpatialQuery;
