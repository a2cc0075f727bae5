// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Caller-supplied intent for one key.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Desired existence state of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Key must exist with the given value (upsert).
    #[default]
    Present,
    /// Key must not exist (delete).
    Absent,
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

impl std::str::FromStr for Presence {
    type Err = StoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(StoreError::invalid(format!(
                "state must be 'present' or 'absent', got '{s}'"
            ))),
        }
    }
}

/// Declarative description of what the store should hold for one key.
///
/// # Example
///
/// ```
/// use envfile_rs::reconcile::{DesiredState, Presence};
///
/// let desired = DesiredState::builder()
///     .key("http_proxy")
///     .value("127.0.0.1")
///     .force_overwrite(false)
///     .build();
///
/// assert_eq!(desired.presence(), Presence::Present);
/// assert!(desired.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DesiredState {
    #[builder(into)]
    key: String,
    #[builder(into)]
    value: Option<String>,
    #[builder(default)]
    presence: Presence,
    #[builder(default = true)]
    force_overwrite: bool,
}

impl DesiredState {
    /// Upsert `key` with `value`, overwriting a different value.
    pub fn present(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::builder().key(key).value(value).build()
    }

    /// Delete `key`.
    pub fn absent(key: impl Into<String>) -> Self {
        Self::builder().key(key).presence(Presence::Absent).build()
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Desired value; ignored when the presence is [`Presence::Absent`].
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub const fn presence(&self) -> Presence {
        self.presence
    }

    #[must_use]
    pub const fn force_overwrite(&self) -> bool {
        self.force_overwrite
    }

    /// Check the request can be expressed as a single store line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRequest` if the key is empty, would not
    /// parse back as a key, or if a present key lacks a single-line value.
    pub fn validate(&self) -> StoreResult<()> {
        if self.key.is_empty() {
            return Err(StoreError::invalid("key must not be empty"));
        }
        if self.key.starts_with('#') {
            return Err(StoreError::invalid(format!(
                "key '{}' would be read back as a comment",
                self.key
            )));
        }
        if self.key.contains(['=', '\n', '\r']) {
            return Err(StoreError::invalid(format!(
                "key '{}' must not contain '=' or line breaks",
                self.key.escape_debug()
            )));
        }

        if self.presence == Presence::Present {
            match self.value.as_deref() {
                None => {
                    return Err(StoreError::invalid(format!(
                        "value is required when state is present (key '{}')",
                        self.key
                    )));
                }
                Some(value) if value.contains(['\n', '\r']) => {
                    return Err(StoreError::invalid(format!(
                        "value for '{}' must fit on a single line",
                        self.key
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
