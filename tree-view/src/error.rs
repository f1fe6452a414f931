//! Top-level errors for the viewer binary.

use thiserror::Error;
use tree_core::TreeError;

/// Command line usage error (sysexits `EX_USAGE`).
pub const USAGE: i32 = 64;
/// Internal software error (sysexits `EX_SOFTWARE`).
pub const SOFTWARE: i32 = 70;

/// Errors reported to the user before exiting.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("viewer failed: {0}")]
    Gui(String),
}

impl ViewError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ViewError::Tree(_) => USAGE,
            ViewError::Gui(_) => SOFTWARE,
        }
    }
}
