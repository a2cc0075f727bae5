// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure parsing and rendering of store text.
//!
//! ```text
//! parse:          KEY=VALUE / KEY="VALUE" per line, split on first '='
//!                 '#' lines and lines without '=' are skipped
//! render_assignment  KEY="VALUE"\n   (append on upsert)
//! render_store       KEY=VALUE\n     (full rewrite on delete)
//! ```
//!
//! The two render forms differ on purpose: upsert quotes, delete rewrites the
//! raw values it read. Both read back identically because comparison and
//! display go through [`normalize`].

use super::map::EnvMap;

/// Parses store text into an ordered mapping.
///
/// Later assignments of the same key win.
#[must_use]
pub fn parse(text: &str) -> EnvMap {
    let mut map = EnvMap::new();
    for (key, value) in text.lines().filter_map(parse_line) {
        map.insert(key, value);
    }
    map
}

/// Splits one physical line into key and raw value.
///
/// Returns `None` for comments and lines without `=`.
#[must_use]
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') {
        return None;
    }
    line.split_once('=')
}

/// Strips double quotes and newlines from a value.
#[must_use]
pub fn normalize(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '"' | '\n')).collect()
}

/// Renders the line appended by an upsert.
#[must_use]
pub fn render_assignment(key: &str, value: &str) -> String {
    format!("{key}=\"{value}\"\n")
}

/// Renders a whole store from a mapping, one unquoted line per entry.
///
/// Comments are not reproduced.
#[must_use]
pub fn render_store(map: &EnvMap) -> String {
    let mut out = String::new();
    for (key, value) in map.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
