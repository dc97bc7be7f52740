//! Error types for Verdict Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid join operator: {0:?} (expected \"and\", \"or\" or \"\")")]
    InvalidJoinOperator(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
