// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   store  (set, unset, apply, get, list)
//!   config (options, inis)
//! ```

pub mod config;
pub mod store;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print before/after snapshots when something changes.
    pub diff: bool,
    /// Print machine-readable JSON instead of text.
    pub json: bool,
}
