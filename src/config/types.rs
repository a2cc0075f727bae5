// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envfile-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig (logging), StoreConfig (target file + policy)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Conventional system-wide environment file on Debian, Ubuntu, RedHat and `CentOS`.
pub const DEFAULT_STORE_PATH: &str = "/etc/environment";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Environment store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Environment file to manage.
    pub path: PathBuf,
    /// Default for overwriting differing values and creating a missing file.
    pub force: bool,
    /// Report before/after snapshots by default.
    pub diff: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            force: true,
            diff: false,
        }
    }
}

impl StoreConfig {
    /// Check the store section is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if `path` is empty and
    /// `ConfigError::InvalidValue` if it names a directory-like path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "store".to_string(),
                key: "path".to_string(),
            });
        }
        if self.path.file_name().is_none() {
            return Err(ConfigError::InvalidValue {
                section: "store".to_string(),
                key: "path".to_string(),
                message: format!("'{}' does not name a file", self.path.display()),
            });
        }
        Ok(())
    }
}
