// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis`: show which settings an envfile run would use.
//!
//! ```text
//! options  [global]/[store] values after layering   text: key = value   json: Config
//! inis     setting layers in load order             text: N. layer      json: [ConfigSource]
//! ```

use super::OutputOptions;
use crate::config::Config;
use crate::config::loader::ConfigSource;
use crate::error::Result;

/// Run the `options` command.
///
/// # Errors
///
/// Returns an error if the settings cannot be serialized.
pub fn run_options_command(config: &Config, output: OutputOptions) -> Result<()> {
    for line in render_options(config, output.json)? {
        println!("{line}");
    }
    Ok(())
}

/// Run the `inis` command.
///
/// # Errors
///
/// Returns an error if the layer list cannot be serialized.
pub fn run_inis_command(sources: &[ConfigSource], output: OutputOptions) -> Result<()> {
    for line in render_sources(sources, output.json)? {
        println!("{line}");
    }
    Ok(())
}

fn render_options(config: &Config, json: bool) -> Result<Vec<String>> {
    if json {
        return Ok(vec![serde_json::to_string(config)?]);
    }
    Ok(config.format_options())
}

fn render_sources(sources: &[ConfigSource], json: bool) -> Result<Vec<String>> {
    if json {
        return Ok(vec![serde_json::to_string(sources)?]);
    }
    if sources.is_empty() {
        return Ok(vec!["No setting layers; built-in defaults apply".to_string()]);
    }
    Ok(sources
        .iter()
        .enumerate()
        .map(|(i, source)| format!("{}. {source}", i + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{render_options, render_sources};
    use crate::config::Config;
    use crate::config::loader::ConfigSource;

    #[test]
    fn test_render_options_json_defaults() {
        let lines = render_options(&Config::default(), true).unwrap();
        insta::assert_snapshot!(
            lines.join("\n"),
            @r#"{"global":{"output_log_level":3,"file_log_level":5},"store":{"path":"/etc/environment","force":true,"diff":false}}"#
        );
    }

    #[test]
    fn test_render_options_text_lists_store_path() {
        let lines = render_options(&Config::default(), false).unwrap();
        assert!(lines.iter().any(|line| line.ends_with("= /etc/environment")));
    }

    #[test]
    fn test_render_sources_text_and_json() {
        let sources = [
            ConfigSource::Ini(PathBuf::from("/etc/envfile.toml")),
            ConfigSource::Env("ENVFILE".to_string()),
        ];

        assert_eq!(
            render_sources(&sources, false).unwrap(),
            [
                "1. ini    /etc/envfile.toml",
                "2. env    ENVFILE_<SECTION>__<KEY>",
            ]
        );
        insta::assert_snapshot!(
            render_sources(&sources, true).unwrap().join("\n"),
            @r#"[{"kind":"ini","source":"/etc/envfile.toml"},{"kind":"env","source":"ENVFILE"}]"#
        );
    }

    #[test]
    fn test_render_sources_empty() {
        assert_eq!(
            render_sources(&[], false).unwrap(),
            ["No setting layers; built-in defaults apply"]
        );
    }
}
