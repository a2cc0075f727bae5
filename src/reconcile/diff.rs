// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Before/after snapshots of a store.
//!
//! Not a key-level delta: both sides are full normalized mappings and the
//! caller compares them however it likes.

use serde::Serialize;

use crate::store::EnvMap;

/// Normalized store contents before and after a write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub before: EnvMap,
    pub after: EnvMap,
}

/// Build a [`Diff`] from raw before/after mappings.
#[must_use]
pub fn get_diff(before: &EnvMap, after: &EnvMap) -> Diff {
    Diff {
        before: before.normalized(),
        after: after.normalized(),
    }
}
