// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for commands that act on the environment file.

use clap::Args;
use clap::builder::BoolishValueParser;

use crate::reconcile::Presence;

/// Overwrite policy shared by `set` and `unset`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ForceArgs {
    /// Fail instead of overwriting a differing value or creating a missing file.
    #[arg(long = "no-force")]
    pub no_force: bool,
}

impl ForceArgs {
    /// Explicit overwrite policy, if the flag was given.
    #[must_use]
    pub const fn force(self) -> Option<bool> {
        if self.no_force { Some(false) } else { None }
    }
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Variable value.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    pub force: ForceArgs,
}

/// Arguments for the `unset` command.
#[derive(Debug, Clone, Args)]
pub struct UnsetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub force: ForceArgs,
}

/// Arguments for the `apply` command.
///
/// Mirrors the declarative parameter set: `key` (alias `name`), `value`,
/// `state` and `force`.
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Unique identifier of the variable.
    #[arg(long, visible_alias = "name", value_name = "KEY")]
    pub key: String,

    /// Value for the variable; required when state is present.
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Whether the variable should exist.
    #[arg(long, value_name = "STATE", default_value = "present")]
    pub state: Presence,

    /// Overwrite differing values and create a missing file (yes/no, true/false).
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub force: Option<bool>,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,
}
