//! Color Placeholder Fixer
//!
//! A Rust CLI tool that strips the stray `#` from `$(#RRGGBB)` color-code
//! placeholders across a directory tree of JSON files, rewriting only the
//! files whose content actually changes.

pub mod error;
pub mod rewrite;
pub mod scanner;

// Re-export commonly used types
pub use error::{FixError, FixResult};
pub use rewrite::{ErrorPolicy, FileOutcome, FixConfig, FixEngine, FixSummary};

/// Fix every `.json` file under `root` with the default configuration
/// (abort on the first failing file, writes enabled)
pub fn fix_directory(root: &std::path::Path) -> FixResult<FixSummary> {
    rewrite::fix_directory(root, &FixConfig::default())
}

/// Apply the placeholder substitution to a single string with a fresh engine
pub fn fix_content(content: &str) -> String {
    FixEngine::new().fix_content(content).into_owned()
}
