//! Configuration and construction.
//!
//! Fluent builder and serde-backed configuration for coordinators, plus
//! the `field_enum!` macro for declaring the closed domains that workflow
//! snapshots are made of.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::{CoordinatorConfig, DEFAULT_MAX_LOG_ENTRIES};
pub use error::BuildError;
pub use machine::CoordinatorBuilder;
