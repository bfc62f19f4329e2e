use thiserror::Error;

use crate::value::Kind;

/// Errors produced by the object-level comparison entry points.
///
/// The value-level path ([`ObjectComparer::compare_values`]) is total and
/// never fails; all error reporting happens here, as values.
///
/// [`ObjectComparer::compare_values`]: crate::ObjectComparer::compare_values
#[derive(Debug, Error)]
pub enum CompareError {
    /// Invalid engine configuration, rejected at construction.
    #[error("invalid compare config: {0}")]
    InvalidConfig(String),
    /// One or both values converted to null at the object-level entry point.
    #[error("one or both values are null")]
    NullInput,
    /// Object-level comparison requires record-shaped values.
    #[error("object-level compare requires record values, got {0:?}")]
    NotARecord(Kind),
    /// The two records declare different runtime types.
    #[error("record types differ: {left} vs {right}")]
    TypeMismatch { left: String, right: String },
    /// Serde bridge failed to convert a value into the comparison model.
    #[error("value conversion failed: {0}")]
    Convert(#[from] serde_json::Error),
}
