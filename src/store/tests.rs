// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvMap, FileStore, Store, normalize, parse, read, render_assignment, render_store};
use crate::error::StoreError;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

// --- parse ---

#[test]
fn test_parse_skips_comments_and_junk() {
    let map = parse("# managed by hand\nPATH=\"/usr/bin\"\njunk line\n\nLANG=C\n#X=1\n");
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, ["PATH", "LANG"]);
    assert_eq!(map.get("PATH"), Some("\"/usr/bin\""));
    assert_eq!(map.get("LANG"), Some("C"));
}

#[test]
fn test_parse_splits_on_first_equals() {
    let map = parse("OPTS=--a=1 --b=2\n");
    assert_eq!(map.get("OPTS"), Some("--a=1 --b=2"));
}

#[test]
fn test_parse_last_duplicate_wins() {
    let map = parse("FOO=\"bar\"\nOTHER=1\nFOO=\"baz\"\n");
    assert_eq!(map.get("FOO"), Some("\"baz\""));
    // Position of the first occurrence is kept
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, ["FOO", "OTHER"]);
}

#[test]
fn test_parse_crlf_and_empty_values() {
    let map = parse("A=1\r\nB=\r\n=orphan\r\n");
    assert_eq!(map.get("A"), Some("1"));
    assert_eq!(map.get("B"), Some(""));
    assert_eq!(map.get(""), Some("orphan"));
}

#[test]
fn test_normalize_strips_quotes_and_newlines() {
    assert_eq!(normalize("\"/usr/bin\""), "/usr/bin");
    assert_eq!(normalize("a\"b\nc"), "abc");
    assert_eq!(normalize("plain"), "plain");
}

#[test]
fn test_render_forms() {
    assert_eq!(
        render_assignment("http_proxy", "127.0.0.1"),
        "http_proxy=\"127.0.0.1\"\n"
    );

    let map: EnvMap = [("A", "\"1\""), ("B", "2")].into_iter().collect();
    assert_eq!(render_store(&map), "A=\"1\"\nB=2\n");
    assert_eq!(render_store(&EnvMap::new()), "");
}

#[test]
fn test_rewrite_round_trip() {
    let original: EnvMap = [("PATH", "\"/usr/bin:/bin\""), ("LANG", "C.UTF-8"), ("EQ", "a=b")]
        .into_iter()
        .collect();
    let reparsed = parse(&render_store(&original));
    assert_eq!(reparsed, original);
}

// --- EnvMap ---

#[test]
fn test_env_map_insert_remove() {
    let mut map = EnvMap::new();
    assert!(map.is_empty());
    assert_eq!(map.insert("A", "1"), None);
    assert_eq!(map.insert("B", "2"), None);
    assert_eq!(map.insert("A", "3"), Some("1".to_string()));
    assert_eq!(map.len(), 2);
    assert_eq!(map.remove("A"), Some("3".to_string()));
    assert_eq!(map.remove("A"), None);
    assert!(!map.contains_key("A"));
    assert!(map.contains_key("B"));
}

#[test]
fn test_env_map_serializes_in_order() {
    let map: EnvMap = [("Z", "\"1\""), ("A", "2")].into_iter().collect();
    let json = serde_json::to_string(&map.normalized()).unwrap();
    insta::assert_snapshot!(json, @r#"{"Z":"1","A":"2"}"#);
}

// --- FileStore ---

#[test]
fn test_read_missing_store_is_none() {
    let temp = temp_dir();
    let result = read(temp.path().join("environment")).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_read_existing_store() {
    let temp = temp_dir();
    let path = temp.path().join("environment");
    std::fs::write(&path, "PATH=\"/usr/bin\"\n").unwrap();

    let map = read(&path).unwrap().expect("store should exist");
    assert_eq!(map.get("PATH"), Some("\"/usr/bin\""));
}

#[test]
fn test_read_invalid_utf8_is_decode_failure() {
    let temp = temp_dir();
    let path = temp.path().join("environment");
    std::fs::write(&path, b"A=1\nB=\xff\xfe\n").unwrap();

    let err = read(&path).unwrap_err();
    assert!(
        matches!(err, StoreError::DecodeFailure { line: 2, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_read_directory_is_read_failure() {
    let temp = temp_dir();
    let err = read(temp.path()).unwrap_err();
    assert!(matches!(err, StoreError::ReadFailure { .. }), "unexpected error: {err:?}");
}

#[test]
fn test_create_empty_keeps_existing_content() {
    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));

    assert!(!store.exists().unwrap());
    store.create_empty().unwrap();
    assert!(store.exists().unwrap());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "");

    std::fs::write(store.path(), "A=1\n").unwrap();
    store.create_empty().unwrap();
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "A=1\n");
}

#[test]
fn test_append_never_truncates() {
    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));
    std::fs::write(store.path(), "# header\nA=1\n").unwrap();

    store.append(b"B=\"2\"\n").unwrap();

    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "# header\nA=1\nB=\"2\"\n"
    );
}

#[test]
fn test_append_after_unterminated_line_starts_new_line() {
    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));
    std::fs::write(store.path(), "A=1").unwrap();

    store.append(b"B=\"2\"\n").unwrap();

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "A=1\nB=\"2\"\n");
    let map = store.read().unwrap().unwrap();
    assert_eq!(map.get("A"), Some("1"));
    assert_eq!(map.get("B"), Some("\"2\""));
}

#[test]
fn test_append_to_empty_store_adds_no_blank_line() {
    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));
    store.create_empty().unwrap();

    store.append(b"A=\"1\"\n").unwrap();

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "A=\"1\"\n");
}

#[test]
fn test_atomic_replace_swaps_content() {
    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));
    std::fs::write(store.path(), "# header\nA=1\nB=2\n").unwrap();

    store.atomic_replace(b"B=2\n").unwrap();

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "B=2\n");
    // No temporary files left behind
    let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[cfg(unix)]
#[test]
fn test_atomic_replace_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));
    std::fs::write(store.path(), "A=1\n").unwrap();
    std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    store.atomic_replace(b"").unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[cfg(unix)]
#[test]
fn test_atomic_replace_keeps_owner() {
    use std::os::unix::fs::MetadataExt;

    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("environment"));
    std::fs::write(store.path(), "A=1\n").unwrap();
    let before = std::fs::metadata(store.path()).unwrap();

    store.atomic_replace(b"B=2\n").unwrap();

    let after = std::fs::metadata(store.path()).unwrap();
    assert_eq!((after.uid(), after.gid()), (before.uid(), before.gid()));
}

#[test]
fn test_atomic_replace_missing_dir_is_write_failure() {
    let temp = temp_dir();
    let store = FileStore::new(temp.path().join("missing").join("environment"));

    let err = store.atomic_replace(b"A=1\n").unwrap_err();
    assert!(matches!(err, StoreError::WriteFailure { .. }), "unexpected error: {err:?}");
}
