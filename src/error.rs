//! Error types for dialect fragment generation.
//!
//! Fragment generators fail fast on structurally invalid input (empty column
//! lists, empty constraint names) instead of deferring to the database to
//! reject malformed DDL/DML text. Identifier and literal quoting are total
//! over all string inputs and never produce an error.

/// Errors raised while rendering dialect-specific SQL fragments.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// The dialect cannot express the requested operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// The caller passed structurally invalid input.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}
