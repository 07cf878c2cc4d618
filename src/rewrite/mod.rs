//! Rewrite pipeline: configuration, substitution engine, and the
//! batch traversal that ties them together.

pub mod batch;
pub mod config;
pub mod engine;
pub mod stats;

pub use batch::fix_directory;
pub use config::{ErrorPolicy, FixConfig};
pub use engine::{FileOutcome, FixEngine};
pub use stats::FixSummary;
