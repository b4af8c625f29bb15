//! Error types for the geoshard library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`GeoShardError`] enum. Errors are local to the shard or operation that
//! raised them; nothing in this crate retries or substitutes defaults, so
//! callers decide their own per-shard fault tolerance.
//!
//! # Examples
//!
//! ```
//! use geoshard::error::{GeoShardError, Result};
//!
//! fn check_k(k: usize) -> Result<()> {
//!     if k == 0 {
//!         return Err(GeoShardError::invalid_argument("k must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_k(0).is_err());
//! assert!(check_k(3).is_ok());
//! ```

use thiserror::Error;

/// The main error type for geoshard operations.
#[derive(Error, Debug)]
pub enum GeoShardError {
    /// A caller-supplied argument is out of range (non-positive `k`,
    /// non-positive radius, out-of-range coordinates, duplicate shard ids).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Shape text could not be parsed.
    #[error("Query parse error: {0}")]
    QueryParse(String),

    /// A stored field has neither a numeric nor a string representation,
    /// or otherwise cannot be projected into a row.
    #[error("Inconsistent field '{field}': {message}")]
    InconsistentField { field: String, message: String },

    /// The shard's index cannot be queried (closed while in use, missing
    /// documents, corrupted state).
    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with GeoShardError.
pub type Result<T> = std::result::Result<T, GeoShardError>;

impl GeoShardError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GeoShardError::InvalidArgument(msg.into())
    }

    /// Create a new query parse error.
    pub fn query_parse<S: Into<String>>(msg: S) -> Self {
        GeoShardError::QueryParse(msg.into())
    }

    /// Create a new inconsistent field error.
    pub fn inconsistent_field<F: Into<String>, S: Into<String>>(field: F, msg: S) -> Self {
        GeoShardError::InconsistentField {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a new index unavailable error.
    pub fn index_unavailable<S: Into<String>>(msg: S) -> Self {
        GeoShardError::IndexUnavailable(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GeoShardError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        GeoShardError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Whether this error was raised before touching any index, i.e. the
    /// request itself is bad and retrying it elsewhere cannot help.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            GeoShardError::InvalidArgument(_) | GeoShardError::QueryParse(_)
        )
    }
}
