// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envfile-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envfile [global options] <command>
//! set <KEY> <VALUE>
//! unset <KEY>
//! apply --key KEY [--value V] [--state present|absent] [--force BOOL]
//! get <KEY>
//! list
//! options | inis | version
//! ```

pub mod global;
pub mod store;


use crate::cli::global::GlobalOptions;
use crate::cli::store::{ApplyArgs, GetArgs, SetArgs, UnsetArgs};
use clap::{Parser, Subcommand};

/// Environment File Manager
///
/// Idempotently sets and removes system-wide environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "envfile",
    author,
    version,
    about = "Manage the system-wide environment file",
    long_about = "envfile-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Sets permanent environment variables in /etc/environment\n\
                  (or the file given with --file). Every command is idempotent:\n\
                  running it twice reports no change the second time.",
    after_help = "CONFIG FILES:\n\n\
                  envfile reads `envfile.toml` from the current directory if\n\
                  present. Additional files can be given with --ini and are loaded\n\
                  first. ENVFILE_STORE__PATH, ENVFILE_STORE__FORCE and similar\n\
                  variables override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Inis,

    /// Sets a variable (state=present).
    Set(SetArgs),

    /// Removes a variable (state=absent).
    Unset(UnsetArgs),

    /// Reconciles one variable from declarative parameters.
    Apply(ApplyArgs),

    /// Prints the value of a variable.
    Get(GetArgs),

    /// Lists all variables in the environment file.
    List,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
