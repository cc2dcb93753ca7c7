//! # Self-contained HTML reports for covdx.
//!
//! A report is one HTML file: the template with the stylesheet, the script and the
//! aggregated statistics (as JSON) injected in place of three markers. Assets can be
//! loaded from a directory or taken from the copies bundled into the crate.
//!
pub mod assets;
pub mod consts;
pub mod data;
pub mod error;
pub mod html;

// re-expose core functions
pub use assets::*;
pub use consts::*;
pub use data::*;
pub use error::*;
pub use html::*;
