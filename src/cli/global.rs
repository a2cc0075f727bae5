// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --file PATH       ← store.path override
//! --diff            ← store.diff = true
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Environment file to manage (default: /etc/environment).
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Report before/after contents when something changes.
    #[arg(long)]
    pub diff: bool,

    /// Print the result as a JSON object.
    #[arg(long)]
    pub json: bool,

    /// Sets a config option, such as 'store.force=false'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// `--set` entries come first so dedicated flags win over them.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` entry is not of the form `KEY=VALUE`.
    pub fn to_config_overrides(&self) -> anyhow::Result<Vec<(String, String)>> {
        let mut overrides = Vec::with_capacity(self.options.len() + 5);

        for option in &self.options {
            let (key, value) = option
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("invalid --set '{option}', expected KEY=VALUE"))?;
            overrides.push((key.trim().to_string(), value.to_string()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".into(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".into(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string()));
        }

        if let Some(ref path) = self.store_path {
            overrides.push(("store.path".into(), path.display().to_string()));
        }

        if self.diff {
            overrides.push(("store.diff".into(), "true".into()));
        }

        Ok(overrides)
    }
}
