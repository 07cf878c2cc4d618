//! Run summary for a directory fix pass

use serde::{Deserialize, Serialize};

/// Aggregate counters collected over one traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSummary {
    /// Candidate `.json` files visited
    pub files_scanned: usize,
    /// Files whose content changed and were rewritten
    pub files_fixed: usize,
    /// Total placeholder occurrences replaced
    pub replacements: usize,
    /// Files skipped because of a read or decode failure
    pub files_skipped: usize,
}

impl FixSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable report printed for `--stats`
    pub fn report(&self) -> String {
        format!(
            "Fix Statistics:\n\
             Files scanned: {}\n\
             Files fixed: {}\n\
             Replacements: {}\n\
             Files skipped: {}",
            self.files_scanned, self.files_fixed, self.replacements, self.files_skipped
        )
    }
}
