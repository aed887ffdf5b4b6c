//! Utilities
//!
//! Error types and path helpers shared by the storage layer and the binary.

pub mod error;
pub mod paths;

pub use error::*;
pub use paths::*;
