//! Configuration options for a fix run

/// Per-file failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// First failing file ends the run with an error
    #[default]
    Abort,
    /// Report the failure to stderr and continue with remaining files
    Skip,
}

/// Options controlling a directory fix run
#[derive(Debug, Clone, Default)]
pub struct FixConfig {
    /// What to do when a candidate file cannot be read or decoded
    pub error_policy: ErrorPolicy,
    /// Report files that would change without writing anything
    pub dry_run: bool,
    /// Suppress per-file and completion output
    pub quiet: bool,
}
