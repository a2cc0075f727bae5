// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result        application plumbing (cmd, config, logging)
//! StoreResult           reconciliation against the store
//!
//! StoreError  -> ErrorKind (caller-facing tag)
//!   UnsupportedEnvironment   ConflictingValue
//!   ReadFailure  DecodeFailure  WriteFailure
//!   InvalidRequest
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`StoreError`].
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// --- Store Errors ---

/// Failures of a single reconciliation against the environment store.
///
/// None of these are retried internally.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store file absent and creation was not allowed.
    #[error(
        "OS may not be supported because {path} is not present. \
         Use force to create the file"
    )]
    UnsupportedEnvironment { path: String },

    /// Key holds a different value and overwrite was not allowed.
    #[error(
        "There is already an environment variable called '{key}' but its content is not \
         '{desired}'. If you still want to add it use force"
    )]
    ConflictingValue {
        key: String,
        current: String,
        desired: String,
    },

    /// Append, temp-file creation, write, or rename failed.
    #[error("Failed to update environment file {path}: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the store failed.
    #[error("Failed to read environment file {path}: {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Store content is not valid UTF-8.
    #[error("There was an error converting content of {path} as binary to text (line {line})")]
    DecodeFailure { path: String, line: usize },

    /// Desired state failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl StoreError {
    /// Caller-facing error tag for this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedEnvironment { .. } => ErrorKind::UnsupportedEnvironment,
            Self::ConflictingValue { .. } => ErrorKind::ConflictingValue,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
            Self::ReadFailure { .. } => ErrorKind::ReadFailure,
            Self::DecodeFailure { .. } => ErrorKind::DecodeFailure,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

/// Error tag reported alongside a failed reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedEnvironment,
    ConflictingValue,
    WriteFailure,
    ReadFailure,
    DecodeFailure,
    InvalidRequest,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedEnvironment => "unsupported_environment",
            Self::ConflictingValue => "conflicting_value",
            Self::WriteFailure => "write_failure",
            Self::ReadFailure => "read_failure",
            Self::DecodeFailure => "decode_failure",
            Self::InvalidRequest => "invalid_request",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
