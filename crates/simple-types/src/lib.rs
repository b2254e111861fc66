//! Shared types for the SIMPLE language.
//!
//! This crate defines the closed term algebra, its canonical rendering,
//! and the literal coercions (`value`, `bool_value`) that every evaluator
//! builds on.

mod error;
pub mod term;

pub use error::TermError;
pub use term::{BinOp, Term};

/// Result type used by the literal coercions.
pub type Result<T> = std::result::Result<T, TermError>;
