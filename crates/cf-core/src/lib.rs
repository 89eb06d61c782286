//! cf-core: shared errors, configuration, and duration parsing.
//!
//! This crate is the foundational dependency for the other cf-* crates,
//! providing the unified error type, application configuration, and the
//! duration-expression parser used to interpret the `--max` argument.

pub mod config;
pub mod duration;
pub mod error;

// Re-export the most commonly used items at the crate root.
pub use duration::parse_duration;
pub use error::{Error, Result};
