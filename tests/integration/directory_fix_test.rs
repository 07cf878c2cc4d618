//! Integration tests for the recursive directory fix

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

use colorfix::{fix_directory, rewrite, FixConfig};

fn quiet_config() -> FixConfig {
    FixConfig {
        quiet: true,
        ..FixConfig::default()
    }
}

#[test]
fn test_mixed_tree_fixes_only_matching_json_files() {
    let tmp = tempdir().unwrap();
    let nested = tmp.path().join("entries");
    fs::create_dir_all(&nested).unwrap();

    // Matching placeholder, gets fixed
    fs::write(tmp.path().join("a.json"), r#""text": "$(#FF00AA)Hello""#).unwrap();
    // No placeholder match, untouched
    fs::write(nested.join("b.json"), r#""text": "$(RED)Hello""#).unwrap();
    // Wrong extension, ignored entirely
    fs::write(nested.join("c.txt"), r#""text": "$(#123456)X""#).unwrap();
    // Lowercase hex, case preserved in the output
    fs::write(nested.join("d.json"), r#""$(#abcdef)""#).unwrap();

    let summary = rewrite::fix_directory(tmp.path(), &quiet_config()).unwrap();

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_fixed, 2);
    assert_eq!(summary.replacements, 2);

    assert_eq!(
        fs::read_to_string(tmp.path().join("a.json")).unwrap(),
        r#""text": "$(FF00AA)Hello""#
    );
    assert_eq!(
        fs::read_to_string(nested.join("b.json")).unwrap(),
        r#""text": "$(RED)Hello""#
    );
    assert_eq!(
        fs::read_to_string(nested.join("c.txt")).unwrap(),
        r#""text": "$(#123456)X""#
    );
    assert_eq!(
        fs::read_to_string(nested.join("d.json")).unwrap(),
        r#""$(abcdef)""#
    );
}

#[test]
fn test_unmodified_file_keeps_original_line_endings() {
    let tmp = tempdir().unwrap();
    let untouched = tmp.path().join("crlf.json");
    let original = b"{\r\n  \"color\": \"$(RED)\"\r\n}\r\n";
    fs::write(&untouched, original).unwrap();

    let rewritten = tmp.path().join("fixed.json");
    fs::write(&rewritten, b"{\r\n  \"color\": \"$(#112233)\"\r\n}\r\n").unwrap();

    rewrite::fix_directory(tmp.path(), &quiet_config()).unwrap();

    // No match means no write, original CRLF bytes preserved
    assert_eq!(fs::read(&untouched).unwrap(), original);
    // A rewritten file is normalized to LF throughout
    assert_eq!(
        fs::read_to_string(&rewritten).unwrap(),
        "{\n  \"color\": \"$(112233)\"\n}\n"
    );
}

#[test]
fn test_running_twice_is_idempotent() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("a.json");
    fs::write(&file, "$(#FF00AA) $(#00ff00)").unwrap();

    rewrite::fix_directory(tmp.path(), &quiet_config()).unwrap();
    let after_first = fs::read_to_string(&file).unwrap();

    let summary = rewrite::fix_directory(tmp.path(), &quiet_config()).unwrap();
    assert_eq!(summary.files_fixed, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), after_first);
    assert_eq!(after_first, "$(FF00AA) $(00ff00)");
}

#[test]
fn test_default_entry_point_fixes_files() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.json"), "$(#0055aa)").unwrap();

    let summary = fix_directory(tmp.path()).unwrap();
    assert_eq!(summary.files_fixed, 1);
}
