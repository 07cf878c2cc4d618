//! The substitution engine: one file's read, substitute, rewrite cycle

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{FixError, FixResult};

/// Matches `$(#RRGGBB)` with exactly six hex digits, either case
const COLOR_PATTERN: &str = r"\$\(#([0-9A-Fa-f]{6})\)";

/// Outcome of processing a single candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and the file was rewritten (or would be, on a dry run)
    Fixed { replacements: usize },
    /// No matches, file left byte-identical
    Unchanged,
}

/// Applies the color placeholder substitution to strings and files
pub struct FixEngine {
    pattern: Regex,
}

impl FixEngine {
    pub fn new() -> Self {
        // The pattern is a fixed literal, so compilation cannot fail.
        Self {
            pattern: Regex::new(COLOR_PATTERN).unwrap(),
        }
    }

    /// Strip the stray `#` from every `$(#RRGGBB)` occurrence. Returns the
    /// input unchanged (borrowed) when there are no matches.
    pub fn fix_content<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, "$$(${1})")
    }

    /// Count the placeholder occurrences in `content`
    pub fn match_count(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }

    /// Full cycle for one candidate file: read as UTF-8, substitute, and
    /// rewrite in place when the content changed. Unchanged files keep
    /// their original bytes; rewritten files get `\n` line endings.
    pub fn fix_file(&self, path: &Path, dry_run: bool) -> FixResult<FileOutcome> {
        let bytes = fs::read(path).map_err(|e| FixError::io(path.to_path_buf(), e))?;
        let content =
            String::from_utf8(bytes).map_err(|_| FixError::decode(path.to_path_buf()))?;

        let replacements = self.match_count(&content);
        if replacements == 0 {
            return Ok(FileOutcome::Unchanged);
        }

        if !dry_run {
            let fixed = self.fix_content(&content);
            let normalized = normalize_line_endings(&fixed);
            fs::write(path, normalized.as_bytes())
                .map_err(|e| FixError::io(path.to_path_buf(), e))?;
        }

        Ok(FileOutcome::Fixed { replacements })
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite `\r\n` pairs and bare `\r` terminators to `\n`. Only applied to
/// content that is already being rewritten.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }

    let mut normalized = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            normalized.push('\n');
        } else {
            normalized.push(c);
        }
    }

    Cow::Owned(normalized)
}
