//! # Record Errors

use thiserror::Error;

/// Result type for record store operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No record in the collection carries the requested id
    #[error("{label} not found")]
    NotFound { label: &'static str, id: i64 },

    /// A derived field overflowed to infinity or NaN
    #[error("{label} {field} is not a finite number")]
    NonFiniteMetric {
        label: &'static str,
        field: &'static str,
    },
}
