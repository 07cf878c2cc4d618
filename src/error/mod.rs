//! Error types for the color placeholder fixer

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading, decoding, or rewriting a candidate file
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("not valid UTF-8: {}", path.display())]
    Decode { path: PathBuf },

    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    pub fn decode(path: PathBuf) -> Self {
        Self::Decode { path }
    }

    pub fn io(path: PathBuf, source: io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Path of the file this error concerns
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path } | Self::Io { path, .. } => path,
        }
    }

    /// Create a user-friendly error message for stderr diagnostics
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode { path } => {
                format!("Cannot decode {} as UTF-8", path.display())
            }
            Self::Io { path, source } => {
                format!("IO error for {}: {}", path.display(), source)
            }
        }
    }
}

/// Result type for fix operations
pub type FixResult<T> = Result<T, FixError>;
