//! Shard-qualified scored results.

use log::debug;
use serde::Serialize;

use crate::document::StoredDocument;
use crate::error::{GeoShardError, Result};
use crate::result::field_kind::{CellValue, FieldKind};
use crate::result::order::Scored;
use crate::result::row::{RESERVED_FIELDS, RowCell, TabularRow};

/// A stored field snapshot with its classified value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultField {
    /// Field name as stored.
    pub name: String,
    /// Typed value.
    pub value: CellValue,
}

impl ResultField {
    /// The declared kind of this field.
    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }
}

/// One hit of a shard query, qualified by the shard that produced it.
///
/// `internal_id` is only meaningful together with `shard_index`; it is the
/// index-local document id and must not be used as a stable identifier.
/// A result is immutable once built, and only [`ScoredResult::new`] builds
/// one. Results serialize but never deserialize:
///
/// ```compile_fail
/// let result: geoshard::result::ScoredResult = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    score: f32,
    internal_id: i32,
    shard_index: i32,
    stored_fields: Vec<ResultField>,
}

impl ScoredResult {
    /// Build a result from a raw hit and its materialized stored document.
    ///
    /// Every stored field is classified. Fails with
    /// [`GeoShardError::InconsistentField`] when a field has neither a
    /// numeric nor a string representation, or when it uses one of the
    /// reserved row names. When a field name repeats, the first value wins,
    /// but every repeated value is still classified.
    pub fn new(
        score: f32,
        internal_id: i32,
        shard_index: i32,
        document: &StoredDocument,
    ) -> Result<Self> {
        let mut stored_fields: Vec<ResultField> = Vec::with_capacity(document.len());

        for field in document.fields() {
            if RESERVED_FIELDS.contains(&field.name.as_str()) {
                return Err(GeoShardError::inconsistent_field(
                    &field.name,
                    "field name is reserved for result metadata",
                ));
            }
            let value = CellValue::from_stored(&field.name, &field.value)?;
            if stored_fields.iter().any(|existing| existing.name == field.name) {
                debug!(
                    "shard {shard_index} doc {internal_id}: keeping first value of multi-valued field '{}'",
                    field.name
                );
                continue;
            }
            stored_fields.push(ResultField {
                name: field.name.clone(),
                value,
            });
        }

        Ok(ScoredResult {
            score,
            internal_id,
            shard_index,
            stored_fields,
        })
    }

    /// Get the relevance score.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Get the shard-local document id.
    pub fn internal_id(&self) -> i32 {
        self.internal_id
    }

    /// Get the id of the shard that produced this result.
    pub fn shard_index(&self) -> i32 {
        self.shard_index
    }

    /// Stored fields in stored order.
    pub fn stored_fields(&self) -> &[ResultField] {
        &self.stored_fields
    }

    /// Look up a stored field value by name.
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        self.stored_fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Project into a flat row: stored fields followed by `__docid__`,
    /// `__score__` and `__shardIndex__`.
    pub fn to_row(&self) -> TabularRow {
        let cells = self
            .stored_fields
            .iter()
            .map(|field| RowCell::new(field.name.clone(), field.value.clone()))
            .collect();
        TabularRow::new(cells, self.internal_id, self.score, self.shard_index)
    }

    /// Like [`ScoredResult::to_row`], consuming the result.
    pub fn into_row(self) -> TabularRow {
        let cells = self
            .stored_fields
            .into_iter()
            .map(|field| RowCell::new(field.name, field.value))
            .collect();
        TabularRow::new(cells, self.internal_id, self.score, self.shard_index)
    }
}

impl Scored for ScoredResult {
    fn score(&self) -> f32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StoredValue;
    use crate::result::row::{DOC_ID_FIELD, SCORE_FIELD, SHARD_INDEX_FIELD};

    fn city() -> StoredDocument {
        StoredDocument::builder()
            .add_text("name", "Zurich")
            .add_double("lon", 8.55)
            .add_double("lat", 47.37)
            .add_int("canton_id", 1)
            .add_long("population", 421_878)
            .add_float("rating", 4.5)
            .build()
    }

    #[test]
    fn test_construction_snapshots_fields() {
        let result = ScoredResult::new(0.75, 12, 3, &city()).unwrap();

        assert_eq!(result.score(), 0.75);
        assert_eq!(result.internal_id(), 12);
        assert_eq!(result.shard_index(), 3);

        let kinds: Vec<_> = result.stored_fields().iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Text,
                FieldKind::Float64,
                FieldKind::Float64,
                FieldKind::Int32,
                FieldKind::Int64,
                FieldKind::Float32,
            ]
        );
        assert_eq!(result.field("population"), Some(&CellValue::Int64(421_878)));
        assert_eq!(result.field("missing"), None);
    }

    #[test]
    fn test_inconsistent_field_is_surfaced() {
        let doc = StoredDocument::builder()
            .add_text("name", "Athens")
            .add_binary("shape_blob", vec![1, 2, 3])
            .build();

        match ScoredResult::new(1.0, 0, 0, &doc) {
            Err(GeoShardError::InconsistentField { field, .. }) => assert_eq!(field, "shape_blob"),
            other => panic!("Expected InconsistentField, got {other:?}"),
        }
    }

    #[test]
    fn test_reserved_field_names_are_rejected() {
        for reserved in [DOC_ID_FIELD, SCORE_FIELD, SHARD_INDEX_FIELD] {
            let doc = StoredDocument::builder().add_int(reserved, 1).build();
            assert!(matches!(
                ScoredResult::new(1.0, 0, 0, &doc),
                Err(GeoShardError::InconsistentField { .. })
            ));
        }
    }

    #[test]
    fn test_multi_valued_field_keeps_first() {
        let mut doc = StoredDocument::new();
        doc.add_field("tag", StoredValue::from("capital"));
        doc.add_field("tag", StoredValue::from("city"));
        doc.add_field("tag", StoredValue::Int(3));

        let result = ScoredResult::new(1.0, 0, 0, &doc).unwrap();
        assert_eq!(result.stored_fields().len(), 1);
        assert_eq!(result.field("tag"), Some(&CellValue::Text("capital".to_string())));
    }

    #[test]
    fn test_binary_in_repeated_field_is_surfaced() {
        let mut doc = StoredDocument::new();
        doc.add_field("tag", StoredValue::from("capital"));
        doc.add_field("tag", StoredValue::Binary(vec![0xde, 0xad]));
        doc.add_field("tag", StoredValue::from("city"));

        match ScoredResult::new(1.0, 0, 0, &doc) {
            Err(GeoShardError::InconsistentField { field, .. }) => assert_eq!(field, "tag"),
            other => panic!("Expected InconsistentField, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_document() {
        let result = ScoredResult::new(0.5, 1, 2, &StoredDocument::new()).unwrap();
        assert!(result.stored_fields().is_empty());
        assert_eq!(result.to_row().len(), 3);
    }
}
