//! # geoshard
//!
//! Spatial search over independently queryable index shards.
//!
//! ## Features
//!
//! - k-nearest-neighbour, circle and arbitrary-shape (WKT) queries per shard
//! - Shard-qualified scored results with a total order for cross-shard merging
//! - Lossless projection of results into typed tabular rows
//! - Parallel fan-out and top-k merge over local shards
//!
//! ## Example
//!
//! ```
//! use geoshard::prelude::*;
//!
//! let ctx = SpatialContext::new();
//! let mut index = MemorySpatialIndex::new("shard-0");
//! index.add_point(
//!     ctx.point(7.45, 46.95)?,
//!     StoredDocument::builder().add_text("name", "Bern").build(),
//! )?;
//!
//! let executor = ShardQueryExecutor::new(0, &index, &ctx);
//! let results = executor.circle_search(&ctx.point(8.55, 47.37)?, 300.0, 10)?;
//! assert_eq!(results.len(), 1);
//!
//! let row = results[0].to_row();
//! assert_eq!(row.get("name"), Some(&CellValue::Text("Bern".to_string())));
//! # Ok::<(), geoshard::error::GeoShardError>(())
//! ```

pub mod document;
pub mod error;
pub mod index;
pub mod result;
pub mod search;
pub mod spatial;

pub mod prelude {
    pub use crate::document::{DocumentBuilder, StoredDocument, StoredValue};
    pub use crate::error::{GeoShardError, Result};
    pub use crate::index::{MemorySpatialIndex, SpatialIndex};
    pub use crate::result::{
        CellValue, FieldKind, ScoreOrder, Scored, ScoredResult, TabularRow, ascending_order,
        descending_order,
    };
    pub use crate::search::{
        ShardQueryExecutor, ShardSearchConfig, ShardedSpatialSearcher, SpatialQuery, merge_top_k,
    };
    pub use crate::spatial::{GeoPoint, Shape, SpatialContext};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
