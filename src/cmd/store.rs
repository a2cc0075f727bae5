// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commands that read or reconcile the environment file.
//!
//! ```text
//! set/unset/apply --> DesiredState --> reconcile::apply_path --> Report
//!                                                                 |
//!                                              text (ok/changed + diff) or JSON
//! get/list        --> store::read --> normalized values
//! ```

use anyhow::{anyhow, bail};
use tracing::debug;

use super::OutputOptions;
use crate::cli::store::{ApplyArgs, GetArgs, SetArgs, UnsetArgs};
use crate::config::Config;
use crate::error::Result;
use crate::reconcile::{DesiredState, Diff, Presence, Report, apply_path};
use crate::store::{self, EnvMap, normalize};

/// Run the `set` command.
///
/// # Errors
///
/// Returns an error if the variable could not be reconciled.
pub fn run_set_command(args: &SetArgs, config: &Config, output: OutputOptions) -> Result<()> {
    let desired = DesiredState::builder()
        .key(args.key.as_str())
        .value(args.value.as_str())
        .force_overwrite(args.force.force().unwrap_or(config.store.force))
        .build();
    reconcile(&desired, config, output)
}

/// Run the `unset` command.
///
/// # Errors
///
/// Returns an error if the variable could not be reconciled.
pub fn run_unset_command(args: &UnsetArgs, config: &Config, output: OutputOptions) -> Result<()> {
    let desired = DesiredState::builder()
        .key(args.key.as_str())
        .presence(Presence::Absent)
        .force_overwrite(args.force.force().unwrap_or(config.store.force))
        .build();
    reconcile(&desired, config, output)
}

/// Run the `apply` command.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the variable could not
/// be reconciled.
pub fn run_apply_command(args: &ApplyArgs, config: &Config, output: OutputOptions) -> Result<()> {
    let desired = DesiredState::builder()
        .key(args.key.as_str())
        .maybe_value(args.value.as_deref())
        .presence(args.state)
        .force_overwrite(args.force.unwrap_or(config.store.force))
        .build();
    reconcile(&desired, config, output)
}

/// Run the `get` command.
///
/// # Errors
///
/// Returns an error if the store cannot be read, is missing, or lacks the key.
pub fn run_get_command(args: &GetArgs, config: &Config, output: OutputOptions) -> Result<()> {
    let current = read_existing(config)?;
    let value = current
        .get(&args.key)
        .map(normalize)
        .ok_or_else(|| anyhow!("'{}' is not set in {}", args.key, config.store.path.display()))?;

    if output.json {
        let single: EnvMap = [(args.key.as_str(), value.as_str())].into_iter().collect();
        println!("{}", serde_json::to_string(&single)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Run the `list` command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or is missing.
pub fn run_list_command(config: &Config, output: OutputOptions) -> Result<()> {
    let current = read_existing(config)?.normalized();

    if output.json {
        println!("{}", serde_json::to_string(&current)?);
    } else {
        for (key, value) in current.iter() {
            println!("{key}={value}");
        }
    }
    Ok(())
}

fn read_existing(config: &Config) -> Result<EnvMap> {
    let path = &config.store.path;
    match store::read(path)? {
        Some(current) => Ok(current),
        None => bail!("environment file {} is not present", path.display()),
    }
}

fn reconcile(desired: &DesiredState, config: &Config, output: OutputOptions) -> Result<()> {
    debug!(
        key = desired.key(),
        presence = %desired.presence(),
        force = desired.force_overwrite(),
        path = %config.store.path.display(),
        "Reconciling environment file"
    );

    let result = apply_path(&config.store.path, desired, output.diff);
    let report = Report::from_result(&result);

    if output.json {
        println!("{}", serde_json::to_string(&report)?);
    } else if report.is_success() {
        let status = if report.changed { "changed" } else { "ok" };
        println!("{status}: {}", desired.key());
        if let Some(diff) = &report.diff {
            for line in render_diff(diff) {
                println!("{line}");
            }
        }
    }

    result.map(drop).map_err(Into::into)
}

/// Render a before/after snapshot as `-`/`+` lines for changed keys.
#[must_use]
pub fn render_diff(diff: &Diff) -> Vec<String> {
    let removed = diff
        .before
        .iter()
        .filter(|(key, value)| diff.after.get(key) != Some(*value))
        .map(|(key, value)| format!("-{key}={value}"));
    let added = diff
        .after
        .iter()
        .filter(|(key, value)| diff.before.get(key) != Some(*value))
        .map(|(key, value)| format!("+{key}={value}"));
    removed.chain(added).collect()
}

#[cfg(test)]
mod tests {
    use super::render_diff;
    use crate::reconcile::get_diff;
    use crate::store::parse;

    #[test]
    fn test_render_diff_changed_and_removed() {
        let before = parse("X=\"1\"\nY=2\nZ=3\n");
        let after = parse("X=\"1\"\nY=\"9\"\n");
        let lines = render_diff(&get_diff(&before, &after));
        assert_eq!(lines, ["-Y=2", "-Z=3", "+Y=9"]);
    }

    #[test]
    fn test_render_diff_identical_is_empty() {
        let map = parse("A=1\n");
        assert!(render_diff(&get_diff(&map, &map)).is_empty());
    }
}
