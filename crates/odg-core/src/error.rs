//! # Error Types
//!
//! Crate-level errors, derived with `thiserror`.
//!
//! Draft data-quality problems are deliberately NOT errors. They are
//! represented as [`Finding`](crate::finding::Finding) values and recovered
//! locally inside the relevant check. The variants here cover genuine
//! failures: malformed inputs to strict constructors and serialization of
//! finished reports.

use thiserror::Error;

/// Top-level error type for the ODG core types.
#[derive(Error, Debug)]
pub enum OdgError {
    /// A timestamp string was malformed or not UTC.
    #[error("temporal error: {0}")]
    Temporal(String),

    /// An entity-kind label was not recognized.
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
