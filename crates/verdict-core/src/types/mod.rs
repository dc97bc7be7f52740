//! Runtime value model
//!
//! This module contains the `Value` type used for input records and rule
//! literals, along with the lookup and coercion helpers the evaluator
//! relies on.

pub mod value;

pub use value::Value;
