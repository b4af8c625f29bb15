//! The scored-result model.
//!
//! Every hit a shard produces is wrapped into a [`ScoredResult`]: the score,
//! the shard-local document id, the id of the shard, and a typed snapshot of
//! the stored document. Results from different shards are ranked against each
//! other with [`descending_order`] / [`ascending_order`] and exported as flat
//! [`TabularRow`]s.

pub mod field_kind;
pub mod order;
pub mod row;
pub mod scored;

pub use field_kind::{CellValue, FieldKind};
pub use order::{ScoreOrder, Scored, ascending_order, descending_order};
pub use row::{DOC_ID_FIELD, RESERVED_FIELDS, RowCell, SCORE_FIELD, SHARD_INDEX_FIELD, TabularRow};
pub use scored::{ResultField, ScoredResult};
