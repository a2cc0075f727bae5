// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ErrorKind, StoreError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "store".to_string(),
        key: "path".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'path' in section '[store]'");
}

#[test]
fn test_unsupported_environment_display() {
    let err = StoreError::UnsupportedEnvironment {
        path: "/etc/environment".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"OS may not be supported because /etc/environment is not present. Use force to create the file"
    );
}

#[test]
fn test_conflicting_value_display() {
    let err = StoreError::ConflictingValue {
        key: "FOO".to_string(),
        current: "bar".to_string(),
        desired: "baz".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"There is already an environment variable called 'FOO' but its content is not 'baz'. If you still want to add it use force"
    );
}

#[test]
fn test_error_kind_mapping() {
    let io = || std::io::Error::other("boom");
    let cases = [
        (
            StoreError::UnsupportedEnvironment { path: "p".into() },
            ErrorKind::UnsupportedEnvironment,
        ),
        (
            StoreError::WriteFailure {
                path: "p".into(),
                source: io(),
            },
            ErrorKind::WriteFailure,
        ),
        (
            StoreError::ReadFailure {
                path: "p".into(),
                source: io(),
            },
            ErrorKind::ReadFailure,
        ),
        (
            StoreError::DecodeFailure {
                path: "p".into(),
                line: 3,
            },
            ErrorKind::DecodeFailure,
        ),
        (StoreError::invalid("empty key"), ErrorKind::InvalidRequest),
    ];

    for (err, expected) in cases {
        assert_eq!(err.kind(), expected, "wrong kind for {err}");
    }
}

#[test]
fn test_error_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ErrorKind::ConflictingValue).unwrap();
    assert_eq!(json, "\"conflicting_value\"");
    assert_eq!(ErrorKind::DecodeFailure.to_string(), "decode_failure");
}
