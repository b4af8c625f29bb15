//! Flat, typed row projection of a scored result.

use serde::Serialize;

use crate::error::Result;
use crate::result::field_kind::{CellValue, FieldKind};
use crate::result::order::Scored;

/// Reserved name of the internal document id cell.
pub const DOC_ID_FIELD: &str = "__docid__";
/// Reserved name of the score cell.
pub const SCORE_FIELD: &str = "__score__";
/// Reserved name of the shard index cell.
pub const SHARD_INDEX_FIELD: &str = "__shardIndex__";

/// Reserved names in the order they trail every row.
pub const RESERVED_FIELDS: [&str; 3] = [DOC_ID_FIELD, SCORE_FIELD, SHARD_INDEX_FIELD];

/// One `(name, kind, value)` triple of a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowCell {
    pub name: String,
    pub kind: FieldKind,
    pub value: CellValue,
}

impl RowCell {
    /// Create a cell; the kind is taken from the value.
    pub fn new<S: Into<String>>(name: S, value: CellValue) -> Self {
        RowCell {
            name: name.into(),
            kind: value.kind(),
            value,
        }
    }
}

/// A flattened [`ScoredResult`](crate::result::ScoredResult).
///
/// Holds every stored field in stored order, then the three reserved cells
/// `__docid__` (int32), `__score__` (float64, widened exactly from the f32
/// score) and `__shardIndex__` (int32).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularRow {
    cells: Vec<RowCell>,
    #[serde(skip)]
    internal_id: i32,
    #[serde(skip)]
    score: f64,
    #[serde(skip)]
    shard_index: i32,
}

impl TabularRow {
    pub(crate) fn new(
        mut cells: Vec<RowCell>,
        internal_id: i32,
        score: f32,
        shard_index: i32,
    ) -> Self {
        let score = f64::from(score);
        cells.reserve(RESERVED_FIELDS.len());
        cells.push(RowCell::new(DOC_ID_FIELD, CellValue::Int32(internal_id)));
        cells.push(RowCell::new(SCORE_FIELD, CellValue::Float64(score)));
        cells.push(RowCell::new(SHARD_INDEX_FIELD, CellValue::Int32(shard_index)));

        TabularRow {
            cells,
            internal_id,
            score,
            shard_index,
        }
    }

    /// All cells, reserved ones last.
    pub fn cells(&self) -> &[RowCell] {
        &self.cells
    }

    /// Cells projected from stored fields only.
    pub fn stored_cells(&self) -> &[RowCell] {
        &self.cells[..self.cells.len() - RESERVED_FIELDS.len()]
    }

    /// Get the number of cells, reserved ones included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a row carries at least the reserved cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row schema as `(name, kind)` pairs in cell order.
    pub fn schema(&self) -> Vec<(&str, FieldKind)> {
        self.cells
            .iter()
            .map(|cell| (cell.name.as_str(), cell.kind))
            .collect()
    }

    /// Look up a cell value by name.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|cell| cell.name == name)
            .map(|cell| &cell.value)
    }

    /// Value of the `__docid__` cell.
    pub fn internal_id(&self) -> i32 {
        self.internal_id
    }

    /// Value of the `__score__` cell.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Value of the `__shardIndex__` cell.
    pub fn shard_index(&self) -> i32 {
        self.shard_index
    }

    /// Serialize the row (cells with names, kinds and values) as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Scored for TabularRow {
    fn score(&self) -> f32 {
        // Exact: the row score was widened from an f32.
        self.score as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StoredDocument;
    use crate::result::scored::ScoredResult;

    fn result(score: f32) -> ScoredResult {
        let doc = StoredDocument::builder()
            .add_text("name", "Lausanne")
            .add_double("lon", 6.63)
            .add_double("lat", 46.52)
            .build();
        ScoredResult::new(score, 42, 7, &doc).unwrap()
    }

    #[test]
    fn test_reserved_cells_trail_in_fixed_order() {
        let row = result(0.5).to_row();

        let schema = row.schema();
        assert_eq!(
            schema,
            vec![
                ("name", FieldKind::Text),
                ("lon", FieldKind::Float64),
                ("lat", FieldKind::Float64),
                (DOC_ID_FIELD, FieldKind::Int32),
                (SCORE_FIELD, FieldKind::Float64),
                (SHARD_INDEX_FIELD, FieldKind::Int32),
            ]
        );
        assert_eq!(row.stored_cells().len(), 3);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_reserved_cells_round_trip() {
        let score = 0.1f32; // not representable exactly in decimal
        let original = result(score);
        let row = original.to_row();

        assert_eq!(row.get(DOC_ID_FIELD), Some(&CellValue::Int32(42)));
        assert_eq!(row.get(SHARD_INDEX_FIELD), Some(&CellValue::Int32(7)));
        assert_eq!(row.get(SCORE_FIELD), Some(&CellValue::Float64(f64::from(score))));

        assert_eq!(row.internal_id(), original.internal_id());
        assert_eq!(row.shard_index(), original.shard_index());
        assert_eq!(row.score() as f32, original.score());
        assert_eq!(Scored::score(&row), score);
    }

    #[test]
    fn test_into_row_matches_to_row() {
        let original = result(0.25);
        let row = original.to_row();
        assert_eq!(original.into_row(), row);
    }

    #[test]
    fn test_json_export() {
        let json = result(0.5).to_row().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let cells = value["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0]["name"], "name");
        assert_eq!(cells[0]["kind"], "Text");
        assert_eq!(cells[0]["value"]["Text"], "Lausanne");
        assert_eq!(cells[3]["name"], DOC_ID_FIELD);
        assert_eq!(cells[3]["value"]["Int32"], 42);
        assert_eq!(cells[4]["value"]["Float64"], 0.5);
    }
}
