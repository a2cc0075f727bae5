// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Strict text decoding for store content.
//!
//! ```text
//! raw bytes --(strip BOM)--> UTF-8 (no replacement) --> &str
//!                                 |
//!                                 +--> Err(line number) on invalid bytes
//! ```
//!
//! Uses `encoding_rs`. Unlike lossy decoding, invalid sequences are reported
//! rather than replaced with U+FFFD, so a corrupted store is never rewritten
//! with mangled values.

use encoding_rs::UTF_8;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Location of the first undecodable line in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLine {
    /// 1-based physical line number.
    pub line: usize,
}

/// Decodes `bytes` as UTF-8 without replacement.
///
/// A leading UTF-8 byte order mark is removed.
///
/// # Errors
///
/// Returns the 1-based number of the first line containing invalid UTF-8.
///
/// # Example
/// ```
/// use envfile_rs::utility::encoding::decode_utf8;
///
/// assert_eq!(decode_utf8(b"\xEF\xBB\xBFA=1\n").unwrap(), "A=1\n");
/// assert_eq!(decode_utf8(b"A=1\nB=\xff\n").unwrap_err().line, 2);
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Result<Cow<'_, str>, InvalidLine> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| first_invalid_line(bytes))
}

fn first_invalid_line(bytes: &[u8]) -> InvalidLine {
    let line = bytes
        .split(|&b| b == b'\n')
        .position(|line| {
            UTF_8
                .decode_without_bom_handling_and_without_replacement(line)
                .is_none()
        })
        .map_or(1, |index| index + 1);

    InvalidLine { line }
}
