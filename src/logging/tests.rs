// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::Path;

use super::{LogConfig, LogLevel, open_log_file};

#[test]
fn test_log_level_directives() {
    let directives: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().directive())
        .collect();
    insta::assert_snapshot!(
        directives.join(" | "),
        @"off | error | warn | info | debug | envfile_rs=trace,warn | trace"
    );
}

#[test]
fn test_log_level_out_of_range_message() {
    let err = LogLevel::new(42).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 42"
    );
}

#[test]
fn test_log_level_serde_as_number() {
    assert_eq!(serde_json::to_string(&LogLevel::DEBUG).unwrap(), "4");
    let level: LogLevel = serde_json::from_str("2").unwrap();
    assert_eq!(level, LogLevel::WARN);

    let err = serde_json::from_str::<LogLevel>("7").unwrap_err();
    assert!(err.to_string().contains("got 7"), "unexpected error: {err}");
}

#[test]
fn test_log_config_defaults_and_setters() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(config.store_path().is_none());

    let config = LogConfig::builder()
        .console_level(LogLevel::SILENT)
        .maybe_log_file(Some("audit.jsonl"))
        .store_path("/etc/environment")
        .build();
    assert_eq!(config.console_level(), LogLevel::SILENT);
    assert_eq!(config.log_file(), Some(Path::new("audit.jsonl")));
    assert_eq!(config.store_path(), Some(Path::new("/etc/environment")));
}

#[test]
fn test_open_log_file_creates_directories_and_appends() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("logs").join("envfile.jsonl");

    {
        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"one\n").unwrap();
    }
    {
        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"two\n").unwrap();
    }

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}
