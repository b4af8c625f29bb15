//! Stored document structure.

use serde::{Deserialize, Serialize};

use crate::document::stored_value::StoredValue;

/// One stored field: a name and the value the index kept for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredField {
    /// Field name
    pub name: String,
    /// Stored value
    pub value: StoredValue,
}

/// A document as materialized from the index.
///
/// Fields keep their insertion order. A name may repeat when the index
/// stored a multi-valued field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    fields: Vec<StoredField>,
}

impl StoredDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        StoredDocument { fields: Vec::new() }
    }

    /// Append a field to the document.
    pub fn add_field<S: Into<String>, V: Into<StoredValue>>(&mut self, name: S, value: V) {
        self.fields.push(StoredField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Get the first value stored under `name`.
    pub fn get_field(&self, name: &str) -> Option<&StoredValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[StoredField] {
        &self.fields
    }

    /// Get all field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: StoredDocument,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: StoredDocument::new(),
        }
    }

    /// Add a text field.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document.add_field(name, StoredValue::Text(value.into()));
        self
    }

    /// Add a 32-bit integer field.
    pub fn add_int<S: Into<String>>(mut self, name: S, value: i32) -> Self {
        self.document.add_field(name, StoredValue::Int(value));
        self
    }

    /// Add a 64-bit integer field.
    pub fn add_long<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.document.add_field(name, StoredValue::Long(value));
        self
    }

    /// Add a 32-bit float field.
    pub fn add_float<S: Into<String>>(mut self, name: S, value: f32) -> Self {
        self.document.add_field(name, StoredValue::Float(value));
        self
    }

    /// Add a 64-bit float field.
    pub fn add_double<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.document.add_field(name, StoredValue::Double(value));
        self
    }

    /// Add a binary field.
    pub fn add_binary<S: Into<String>>(mut self, name: S, value: Vec<u8>) -> Self {
        self.document.add_field(name, StoredValue::Binary(value));
        self
    }

    /// Add a field with a generic value.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: StoredValue) -> Self {
        self.document.add_field(name, value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> StoredDocument {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let doc = StoredDocument::builder()
            .add_text("name", "Bern")
            .add_double("lon", 7.45)
            .add_double("lat", 46.95)
            .add_long("population", 134_591)
            .build();

        assert_eq!(doc.field_names(), vec!["name", "lon", "lat", "population"]);
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.get_field("population"), Some(&StoredValue::Long(134_591)));
        assert!(doc.has_field("lat"));
        assert!(!doc.has_field("elevation"));
    }

    #[test]
    fn test_multi_valued_field() {
        let mut doc = StoredDocument::new();
        doc.add_field("tag", "capital");
        doc.add_field("tag", "city");

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_field("tag").and_then(|v| v.as_text()), Some("capital"));
    }

    #[test]
    fn test_empty_document() {
        let doc = StoredDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.get_field("anything"), None);
    }
}
