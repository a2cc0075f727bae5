// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment store access.
//!
//! # Architecture
//!
//! ```text
//! parse   (pure)   text <-> EnvMap, normalize, render
//! map     (pure)   EnvMap ordered mapping
//! file    (I/O)    FileStore: Store
//!
//! Store trait: exists / create_empty / read / append / atomic_replace
//! append never joins an unterminated last line
//! ```
//!
//! # File Format
//!
//! ```text
//! # comment            skipped
//! PATH="/usr/bin"      key PATH, raw value "\"/usr/bin\""
//! OPTS=a=b             key OPTS, raw value "a=b"
//! junk                 skipped (no '=')
//! ```
//!
//! A missing file is not an error here: [`Store::read`] yields `None` and
//! the caller decides what an absent store means.

pub mod file;
pub mod map;
pub mod parse;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::StoreResult;

pub use file::FileStore;
pub use map::EnvMap;
pub use parse::{normalize, parse, render_assignment, render_store};

/// Side-effecting access to one environment store.
///
/// All decision logic works on [`EnvMap`]; implementors only move bytes.
pub trait Store {
    /// Location of the store, used in error messages and logs.
    fn path(&self) -> &Path;

    /// Check whether the store exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailure` if existence cannot be determined.
    fn exists(&self) -> StoreResult<bool>;

    /// Create an empty store, leaving an existing one untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailure` if the file cannot be created.
    fn create_empty(&self) -> StoreResult<()>;

    /// Read and parse the whole store, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailure` on I/O errors and
    /// `StoreError::DecodeFailure` if the content is not valid UTF-8.
    fn read(&self) -> StoreResult<Option<EnvMap>>;

    /// Append bytes to the end of the store without truncating it.
    ///
    /// If the store's last line is unterminated, a newline is written first
    /// so the appended bytes start a line of their own.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailure` if opening or writing fails.
    fn append(&self, bytes: &[u8]) -> StoreResult<()>;

    /// Replace the whole store so readers see either old or new content.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailure` if the temporary file cannot be
    /// created, written, or renamed. The original store is left untouched.
    fn atomic_replace(&self, bytes: &[u8]) -> StoreResult<()>;
}

/// Read the store at `path`, or `None` if it does not exist.
///
/// # Errors
///
/// See [`Store::read`].
pub fn read(path: impl AsRef<Path>) -> StoreResult<Option<EnvMap>> {
    FileStore::new(path.as_ref()).read()
}
