// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::Path;

use envfile_rs::config::Config;
use envfile_rs::logging::LogLevel;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.store.path, Path::new("/etc/environment"));
    assert!(config.store.force);
    assert!(!config.store.diff);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 1
file_log_level = 4
log_file = "/var/log/envfile.log"

[store]
path = "/srv/app/environment"
force = false
diff = true
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(Path::new("/var/log/envfile.log"))
    );
    assert_eq!(config.store.path, Path::new("/srv/app/environment"));
    assert!(!config.store.force);
    assert!(config.store.diff);
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_file_wins() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[store]\npath = \"/a\"\nforce = false\n").unwrap();
    std::fs::write(&local, "[store]\npath = \"/b\"\n").unwrap();

    let config = Config::builder()
        .ini(&base)
        .ini(&local)
        .build()
        .unwrap();

    assert_eq!(config.store.path, Path::new("/b"));
    assert!(!config.store.force);
}

#[test]
fn config_set_override_beats_files() {
    let config = Config::builder()
        .inline("[store]\ndiff = false\n")
        .set("store.diff", "true")
        .unwrap()
        .set("store.path", "/tmp/environment")
        .unwrap()
        .build()
        .unwrap();

    assert!(config.store.diff);
    assert_eq!(config.store.path, Path::new("/tmp/environment"));
}

#[test]
fn config_from_file_missing_is_error() {
    let temp = tempfile::tempdir().unwrap();
    assert!(Config::from_file(temp.path().join("nope.toml")).is_err());
}
