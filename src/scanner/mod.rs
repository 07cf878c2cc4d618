//! Discovery of candidate `.json` files under the traversal root

pub mod filter;

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find candidate `.json` files under `root`. If recursive is true, use
/// walkdir; otherwise list the top-level directory only. Traversal order
/// follows filesystem enumeration order and is not sorted.
pub fn find_json_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(root) {
            let entry = entry?;
            let path = entry.path();
            if filter::is_json_file(path) {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if filter::is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    Ok(json_files)
}
