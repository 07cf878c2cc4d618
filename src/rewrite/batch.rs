//! Sequential traversal applying the fix to every candidate file

use std::path::Path;

use crate::error::{FixError, FixResult};
use crate::rewrite::config::{ErrorPolicy, FixConfig};
use crate::rewrite::engine::{FileOutcome, FixEngine};
use crate::rewrite::stats::FixSummary;
use crate::scanner;

/// Fix every `.json` file under `root`, one file at a time. Prints one
/// `Fixed: <filename>` line per rewritten file and a completion notice
/// once the traversal finishes, unless quiet.
pub fn fix_directory(root: &Path, config: &FixConfig) -> FixResult<FixSummary> {
    let engine = FixEngine::new();
    let files = scanner::find_json_files(root, true)
        .map_err(|e| FixError::io(root.to_path_buf(), e))?;

    let mut summary = FixSummary::new();

    for file in files {
        summary.files_scanned += 1;

        match engine.fix_file(&file, config.dry_run) {
            Ok(FileOutcome::Fixed { replacements }) => {
                summary.files_fixed += 1;
                summary.replacements += replacements;
                if !config.quiet {
                    let label = if config.dry_run { "Would fix" } else { "Fixed" };
                    println!("{}: {}", label, base_name(&file));
                }
            }
            Ok(FileOutcome::Unchanged) => {}
            Err(e) => match config.error_policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    eprintln!("✗ {}", e.user_message());
                    summary.files_skipped += 1;
                }
            },
        }
    }

    if !config.quiet {
        println!("All files processed!");
    }

    Ok(summary)
}

/// Base filename for console output, falling back to the full path for
/// entries without a final component
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
