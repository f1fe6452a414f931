//! Growing ASCII-art trees.
//!
//! Main components:
//! - [`tree`] — the [`tree::Tree`] model and its variants.
//! - [`variant`] — the tag naming each kind of tree.
//! - [`growth`] — random growth rules shared by the variants.
//! - [`render`] — text rendering helpers.
//! - [`garden`] — several trees grown side by side.
//! - [`config`] — run settings and input validation.
//! - [`error`] — error taxonomy.
//! - [`types`] — shared counter type and row width.

pub mod config;
pub mod error;
pub mod garden;
pub mod growth;
pub mod render;
pub mod tree;
pub mod types;
pub mod variant;

#[cfg(test)]
mod testing;

pub use error::{Result, TreeError};
pub use garden::Garden;
pub use tree::Tree;
pub use variant::Variant;
