//! Field kinds and typed cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::StoredValue;
use crate::error::{GeoShardError, Result};

/// The declared kind of a projected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// UTF-8 text
    Text,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit float
    Float64,
    /// 32-bit float
    Float32,
}

impl FieldKind {
    /// Classify a stored value.
    ///
    /// Numeric representations win over string ones and map one-to-one onto
    /// their own kind; `Long`, `Float` and `Double` never share a kind.
    /// Returns `None` for values with neither representation.
    pub fn classify(value: &StoredValue) -> Option<FieldKind> {
        match value {
            StoredValue::Int(_) => Some(FieldKind::Int32),
            StoredValue::Long(_) => Some(FieldKind::Int64),
            StoredValue::Double(_) => Some(FieldKind::Float64),
            StoredValue::Float(_) => Some(FieldKind::Float32),
            StoredValue::Text(_) => Some(FieldKind::Text),
            StoredValue::Binary(_) => None,
        }
    }

    /// Whether values of this kind are numeric.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FieldKind::Text)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Int32 => "int32",
            FieldKind::Int64 => "int64",
            FieldKind::Float64 => "float64",
            FieldKind::Float32 => "float32",
        };
        f.write_str(name)
    }
}

/// A typed value, tagged with its [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// UTF-8 text.
    Text(String),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// 32-bit float.
    Float32(f32),
}

impl CellValue {
    /// Project a stored value of field `name` into a typed cell.
    pub fn from_stored(name: &str, value: &StoredValue) -> Result<CellValue> {
        match value {
            StoredValue::Int(v) => Ok(CellValue::Int32(*v)),
            StoredValue::Long(v) => Ok(CellValue::Int64(*v)),
            StoredValue::Double(v) => Ok(CellValue::Float64(*v)),
            StoredValue::Float(v) => Ok(CellValue::Float32(*v)),
            StoredValue::Text(s) => Ok(CellValue::Text(s.clone())),
            StoredValue::Binary(bytes) => Err(GeoShardError::inconsistent_field(
                name,
                format!(
                    "stored value has neither a numeric nor a string representation ({} bytes of binary data)",
                    bytes.len()
                ),
            )),
        }
    }

    /// The kind of this cell.
    pub fn kind(&self) -> FieldKind {
        match self {
            CellValue::Text(_) => FieldKind::Text,
            CellValue::Int32(_) => FieldKind::Int32,
            CellValue::Int64(_) => FieldKind::Int64,
            CellValue::Float64(_) => FieldKind::Float64,
            CellValue::Float32(_) => FieldKind::Float32,
        }
    }

    /// Get the text value, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value of an `Int32` cell.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            CellValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value of an `Int64` cell.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value of a `Float64` cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value of a `Float32` cell.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            CellValue::Float32(v) => Some(*v),
            _ => None,
        }
    }
}
