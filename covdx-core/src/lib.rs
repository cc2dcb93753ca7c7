//! # Core models for covdx.
//!
//! Genomic regions and the parser for `chr:start-end` region strings, the immutable
//! region set shared by every per-sample computation, the region config file, and the
//! rule that maps an alignment file name to its sample identifier.
//!
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

// re-expose core types
pub use config::*;
pub use errors::*;
pub use models::*;
