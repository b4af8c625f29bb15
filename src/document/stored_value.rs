//! Stored field values.
//!
//! This module defines the [`StoredValue`] enum: the representation an index
//! keeps for one stored field.
//!
//! # Supported Types
//!
//! - **Int** - 32-bit signed integers
//! - **Long** - 64-bit signed integers
//! - **Float** - 32-bit floating-point numbers
//! - **Double** - 64-bit floating-point numbers
//! - **Text** - String data
//! - **Binary** - Raw byte data
//!
//! The four numeric variants carry a numeric representation, `Text` carries a
//! string representation, and `Binary` carries neither.
//!
//! ```
//! use geoshard::document::StoredValue;
//!
//! let population = StoredValue::Long(8_700_000);
//! assert!(population.is_numeric());
//! assert_eq!(population.as_text(), None);
//!
//! let name = StoredValue::from("Bern");
//! assert_eq!(name.as_text(), Some("Bern"));
//! ```

use serde::{Deserialize, Serialize};

/// Represents the stored value of a field in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    /// 32-bit integer value
    Int(i32),
    /// 64-bit integer value
    Long(i64),
    /// 32-bit floating point value
    Float(f32),
    /// 64-bit floating point value
    Double(f64),
    /// Text value
    Text(String),
    /// Binary data
    Binary(Vec<u8>),
}

impl StoredValue {
    /// Whether this value carries a numeric representation.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            StoredValue::Int(_)
                | StoredValue::Long(_)
                | StoredValue::Float(_)
                | StoredValue::Double(_)
        )
    }

    /// Get the string representation if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as binary data, if possible.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            StoredValue::Binary(data) => Some(data),
            _ => None,
        }
    }

    /// Short name of the stored type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            StoredValue::Int(_) => "int",
            StoredValue::Long(_) => "long",
            StoredValue::Float(_) => "float",
            StoredValue::Double(_) => "double",
            StoredValue::Text(_) => "text",
            StoredValue::Binary(_) => "binary",
        }
    }
}

impl From<i32> for StoredValue {
    fn from(value: i32) -> Self {
        StoredValue::Int(value)
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        StoredValue::Long(value)
    }
}

impl From<f32> for StoredValue {
    fn from(value: f32) -> Self {
        StoredValue::Float(value)
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        StoredValue::Double(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_string())
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_representation() {
        assert!(StoredValue::Int(1).is_numeric());
        assert!(StoredValue::Long(1).is_numeric());
        assert!(StoredValue::Float(1.0).is_numeric());
        assert!(StoredValue::Double(1.0).is_numeric());
        assert!(!StoredValue::Text("1".to_string()).is_numeric());
        assert!(!StoredValue::Binary(vec![1]).is_numeric());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(StoredValue::from(7i32), StoredValue::Int(7));
        assert_eq!(StoredValue::from(7i64), StoredValue::Long(7));
        assert_eq!(StoredValue::from(0.5f32), StoredValue::Float(0.5));
        assert_eq!(StoredValue::from(0.5f64), StoredValue::Double(0.5));
        assert_eq!(StoredValue::from("Zurich").as_text(), Some("Zurich"));
        assert_eq!(StoredValue::Binary(vec![0, 1]).as_binary(), Some(&[0u8, 1][..]));
        assert_eq!(StoredValue::Binary(vec![]).type_name(), "binary");
    }
}
