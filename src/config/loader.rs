// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings for an envfile run.
//!
//! ```text
//! defaults < --ini FILE... < ./envfile.toml < ENVFILE_<SECTION>__<KEY> < overrides
//!
//! ConfigLoader::new().ini(a).local(b).env_prefix("ENVFILE").set(k, v)?.build()?
//!                                                                    |
//!                                         Config { [global], [store] }, validated
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::Serialize;

use super::Config;
use crate::error::Result;

/// One layer that contributed settings, in load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum ConfigSource {
    /// File named with `--ini`; must exist.
    Ini(PathBuf),
    /// Per-directory `envfile.toml`; listed only when present.
    Local(PathBuf),
    /// TOML text supplied directly.
    Inline,
    /// Environment variables under this prefix.
    Env(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ini(path) => write!(f, "ini    {}", path.display()),
            Self::Local(path) => write!(f, "local  {}", path.display()),
            Self::Inline => write!(f, "inline <toml>"),
            Self::Env(prefix) => write!(f, "env    {prefix}_<SECTION>__<KEY>"),
        }
    }
}

/// Collects setting layers and resolves them into a [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Layer a TOML file that must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn ini(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::Ini(path.to_path_buf()));
        self
    }

    /// Layer a TOML file if it exists.
    #[must_use]
    pub fn local(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.is_file() {
            self.sources.push(ConfigSource::Local(path.to_path_buf()));
        }
        self
    }

    /// Layer TOML text.
    #[must_use]
    pub fn inline(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Read `<PREFIX>_<SECTION>__<KEY>` variables, above every file layer.
    #[must_use]
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Override one dotted key such as `store.force`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid dotted path.
    pub fn set(mut self, key: &str, value: impl Into<config::Value>) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override '{key}'"))?;
        Ok(self)
    }

    /// Layers seen so far, in load order.
    #[must_use]
    pub fn sources(&self) -> Vec<ConfigSource> {
        let mut sources = self.sources.clone();
        if let Some(prefix) = &self.env_prefix {
            sources.push(ConfigSource::Env(prefix.clone()));
        }
        sources
    }

    /// Merge every layer into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if an `--ini` file is missing or malformed, if a value
    /// has the wrong type for its `[global]` or `[store]` key, or if the store
    /// path is unusable.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };

        let merged = builder
            .build()
            .context("failed to read envfile settings")?;
        let config: Config = merged
            .try_deserialize()
            .context("envfile settings do not fit the [global] and [store] sections")?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
