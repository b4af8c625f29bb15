//! Stored documents as materialized from a shard's index.
//!
//! A [`StoredDocument`] is the ordered list of fields persisted for one
//! indexed entity. Each field holds a [`StoredValue`], the representation
//! the index kept for it.

#[allow(clippy::module_inception)]
pub mod document;
pub mod stored_value;

// Re-export commonly used types
pub use document::{DocumentBuilder, StoredDocument, StoredField};
pub use stored_value::StoredValue;
