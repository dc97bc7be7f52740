//! Error types for the verdict engine

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// A leaf term names an operator the registry does not know.
    /// Raised when the compiled predicate runs, so it points at a
    /// rule-authoring mistake rather than bad input data.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// `register` was called with a name that already exists.
    /// The existing entry is left untouched.
    #[error("Operator already registered: {0}")]
    DuplicateOperator(String),

    /// A custom operator reported a failure of its own
    #[error("Operator failed: {0}")]
    Operator(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
