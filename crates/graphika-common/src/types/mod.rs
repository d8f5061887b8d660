//! Core type definitions for Graphika.
//!
//! This module contains the fundamental types used throughout the engine:
//! - Identifier types ([`VertexId`])
//! - The numeric edge-weight abstraction ([`Weight`])

mod id;
mod weight;

pub use id::VertexId;
pub use weight::Weight;
