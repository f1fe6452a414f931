//! Error taxonomy for the tree model.

use thiserror::Error;

/// Errors raised at the boundary of the tree model.
///
/// Growth itself is total over its `u32` inputs; the only failures are
/// rejected arguments coming from signed or textual sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid argument: {name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("{name} out of range: {value} exceeds the maximum of {max}", max = u32::MAX)]
    OutOfRange { name: &'static str, value: i64 },

    #[error("unknown tree variant: {0:?}")]
    UnknownVariant(String),
}

/// Result type for fallible tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
