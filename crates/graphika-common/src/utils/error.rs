//! Error and Result types.
//!
//! The algorithm surface itself never fails: invalid references degrade
//! to no-ops and unreachable targets come back as sentinel result fields.
//! These types cover the edges of the system that can genuinely fail,
//! such as loading an edge list from disk or validating generator
//! parameters.

use thiserror::Error;

/// Errors produced outside the pure algorithm surface.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge-list line could not be parsed.
    #[error("invalid edge list entry at line {line}: {message}")]
    EdgeListParse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A caller-supplied parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
