//! Utility functions and helpers.
//!
//! - [`error`] - Error and Result types
//! - [`hash`] - Hash map/set type aliases
//! - [`timer`] - Wall-clock interval measurement

pub mod error;
pub mod hash;
pub mod timer;
