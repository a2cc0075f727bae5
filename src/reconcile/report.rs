// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flat result record handed back to callers.
//!
//! ```text
//! Ok(Outcome)      -> { changed, diff?, error_kind: null }
//! Err(StoreError)  -> { changed: false, error_kind, msg }
//! ```

use serde::Serialize;

use super::Outcome;
use super::diff::Diff;
use crate::error::{ErrorKind, StoreResult};

/// Serializable summary of one `apply` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Report {
    #[must_use]
    pub fn from_result(result: &StoreResult<Outcome>) -> Self {
        match result {
            Ok(outcome) => Self {
                changed: outcome.changed,
                diff: outcome.diff.clone(),
                error_kind: None,
                msg: None,
            },
            Err(err) => Self {
                changed: false,
                diff: None,
                error_kind: Some(err.kind()),
                msg: Some(err.to_string()),
            },
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error_kind.is_none()
    }
}
