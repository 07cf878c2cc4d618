use std::path::Path;

/// Return true if the file name ends with the literal `.json` suffix.
/// The match is case-sensitive, so `a.JSON` does not qualify.
pub fn has_json_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}

/// Return true if the path is a regular file with a `.json` suffix
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && has_json_suffix(path)
}
