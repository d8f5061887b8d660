//! # graphika-common
//!
//! Foundation layer for Graphika: types and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Graphika crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Weight)
//! - [`utils`] - Utility functions and helpers (hashing, errors, timing)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{VertexId, Weight};
pub use utils::error::{Error, Result};
pub use utils::timer::Timer;
