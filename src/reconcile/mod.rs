// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Desired-state reconciliation for one key.
//!
//! # Flow
//!
//! ```text
//! apply(store, desired, want_diff)
//!   validate
//!   store missing? --force--> create_empty
//!                 \--no force--> UnsupportedEnvironment
//!   read --> observe --> plan
//!                         |
//!        +----------------+----------------+
//!        v                v                v
//!      NoOp        Append KEY="V"    Rewrite KEY=V...
//!                  (upsert)          (delete, atomic)
//!                         |
//!                   read again (diff only)
//! ```
//!
//! # Per-key State
//!
//! ```text
//! Unknown -> Absent | PresentSame | PresentDifferent
//!         -> NoOp | Written | Failed
//! ```
//!
//! # Compatibility Notes
//!
//! A forced overwrite appends a second line for the key instead of editing the
//! first; reads collapse duplicates with last-write-wins. A delete rewrites the
//! store unquoted and drops comment lines. Both are kept as-is for existing
//! stores and callers.

pub mod desired;
pub mod diff;
pub mod report;


use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::{EnvMap, FileStore, Store, normalize, render_assignment, render_store};

pub use desired::{DesiredState, Presence};
pub use diff::{Diff, get_diff};
pub use report::Report;

/// What the current store holds for the desired key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Key not in the store.
    Absent,
    /// Key present and its normalized value matches (or no value to compare).
    PresentSame,
    /// Key present with a different normalized value.
    PresentDifferent { current: String },
}

/// Write needed to reach the desired state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NoOp,
    /// Append one quoted assignment line.
    Append { line: String },
    /// Replace the whole store with this content.
    Rewrite { content: String },
}

/// Successful result of [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    /// Present only when the caller asked for a diff and something changed.
    pub diff: Option<Diff>,
}

impl Outcome {
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            changed: false,
            diff: None,
        }
    }
}

/// Compare the current mapping against the desired key and value.
#[must_use]
pub fn observe(current: &EnvMap, key: &str, value: Option<&str>) -> Observation {
    let Some(existing) = current.get(key) else {
        return Observation::Absent;
    };

    match value {
        Some(value) if normalize(existing) != normalize(value) => Observation::PresentDifferent {
            current: normalize(existing),
        },
        _ => Observation::PresentSame,
    }
}

/// Decide the write needed to move `current` to `desired`.
///
/// # Errors
///
/// Returns `StoreError::ConflictingValue` if the key holds a different value
/// and overwriting is not allowed, or `StoreError::InvalidRequest` if a
/// present key has no value.
pub fn plan(current: &EnvMap, desired: &DesiredState) -> StoreResult<Action> {
    let key = desired.key();

    match desired.presence() {
        Presence::Present => {
            let value = desired.value().ok_or_else(|| {
                StoreError::invalid(format!("value is required when state is present (key '{key}')"))
            })?;

            match observe(current, key, Some(value)) {
                Observation::PresentSame => Ok(Action::NoOp),
                Observation::PresentDifferent { current } if !desired.force_overwrite() => {
                    Err(StoreError::ConflictingValue {
                        key: key.to_string(),
                        current,
                        desired: value.to_string(),
                    })
                }
                Observation::PresentDifferent { .. } | Observation::Absent => Ok(Action::Append {
                    line: render_assignment(key, value),
                }),
            }
        }
        Presence::Absent => {
            if !current.contains_key(key) {
                return Ok(Action::NoOp);
            }
            let mut remaining = current.clone();
            remaining.remove(key);
            Ok(Action::Rewrite {
                content: render_store(&remaining),
            })
        }
    }
}

/// Reconcile `store` with `desired`.
///
/// Reads the store once, writes at most once, and reads again only when
/// `want_diff` is set and a write happened.
///
/// # Errors
///
/// Returns a [`StoreError`] describing the first failure; nothing is retried.
pub fn apply<S: Store + ?Sized>(
    store: &S,
    desired: &DesiredState,
    want_diff: bool,
) -> StoreResult<Outcome> {
    desired.validate()?;
    ensure_store(store, desired.force_overwrite())?;

    let before = store.read()?.unwrap_or_default();
    let action = plan(&before, desired)?;
    debug!(
        key = desired.key(),
        presence = %desired.presence(),
        action = ?action,
        "Planned store change"
    );

    match action {
        Action::NoOp => return Ok(Outcome::unchanged()),
        Action::Append { line } => {
            if before.contains_key(desired.key()) {
                warn!(
                    key = desired.key(),
                    path = %store.path().display(),
                    "Overwriting existing value; store now holds duplicate lines for this key"
                );
            }
            store.append(line.as_bytes())?;
            info!(key = desired.key(), path = %store.path().display(), "Set environment variable");
        }
        Action::Rewrite { content } => {
            store.atomic_replace(content.as_bytes())?;
            info!(key = desired.key(), path = %store.path().display(), "Removed environment variable");
        }
    }

    let diff = if want_diff {
        let after = store.read()?.unwrap_or_default();
        Some(get_diff(&before, &after))
    } else {
        None
    };

    Ok(Outcome {
        changed: true,
        diff,
    })
}

/// [`apply`] against the file at `path`.
///
/// # Errors
///
/// See [`apply`].
pub fn apply_path(
    path: impl AsRef<Path>,
    desired: &DesiredState,
    want_diff: bool,
) -> StoreResult<Outcome> {
    apply(&FileStore::new(path.as_ref()), desired, want_diff)
}

fn ensure_store<S: Store + ?Sized>(store: &S, force: bool) -> StoreResult<()> {
    if store.exists()? {
        return Ok(());
    }
    if !force {
        return Err(StoreError::UnsupportedEnvironment {
            path: store.path().display().to_string(),
        });
    }
    store.create_empty()?;
    info!(path = %store.path().display(), "Created empty environment store");
    Ok(())
}
