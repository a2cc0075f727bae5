// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem-backed store.
//!
//! ```text
//! read()            fs::read --> decode_utf8 --> parse
//! append()          O_CREAT|O_APPEND, never truncates, starts on a fresh line
//! atomic_replace()  NamedTempFile in store dir --> mode/owner --> fsync --> rename
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::Store;
use super::map::EnvMap;
use super::parse::parse;
use crate::error::{StoreError, StoreResult};
use crate::utility::encoding::decode_utf8;

/// Environment store at a fixed path on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::ReadFailure {
            path: self.display(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::WriteFailure {
            path: self.display(),
            source,
        }
    }

    /// Give the replacement file the owner and group of the store it replaces.
    ///
    /// Changing ownership needs privileges the caller may lack; the replace
    /// still goes ahead, owned by the caller.
    #[cfg(unix)]
    fn copy_owner(&self, temp: &fs::File, original: &fs::Metadata) {
        use std::os::unix::fs::{MetadataExt, fchown};

        let Ok(current) = temp.metadata() else {
            return;
        };
        if current.uid() == original.uid() && current.gid() == original.gid() {
            return;
        }
        if let Err(e) = fchown(temp, Some(original.uid()), Some(original.gid())) {
            warn!(
                path = %self.path.display(),
                uid = original.uid(),
                gid = original.gid(),
                error = %e,
                "Could not keep store ownership"
            );
        }
    }

    /// Directory that receives the temporary file for a replace.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Store for FileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> StoreResult<bool> {
        fs::exists(&self.path).map_err(|e| self.read_error(e))
    }

    fn create_empty(&self) -> StoreResult<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(drop)
            .map_err(|e| self.write_error(e))
    }

    fn read(&self) -> StoreResult<Option<EnvMap>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.read_error(e)),
        };

        let text = decode_utf8(&bytes).map_err(|invalid| StoreError::DecodeFailure {
            path: self.display(),
            line: invalid.line,
        })?;

        let map = parse(&text);
        debug!(path = %self.path.display(), entries = map.len(), "Read store");
        Ok(Some(map))
    }

    fn append(&self, bytes: &[u8]) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        let needs_newline = ends_mid_line(&mut file).map_err(|e| self.write_error(e))?;
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        if needs_newline {
            buf.push(b'\n');
        }
        buf.extend_from_slice(bytes);

        file.write_all(&buf).map_err(|e| self.write_error(e))?;
        file.sync_all().map_err(|e| self.write_error(e))
    }

    fn atomic_replace(&self, bytes: &[u8]) -> StoreResult<()> {
        let dir = self.parent_dir();
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;

        temp.write_all(bytes).map_err(|e| self.write_error(e))?;

        if let Ok(meta) = fs::metadata(&self.path) {
            #[cfg(unix)]
            self.copy_owner(temp.as_file(), &meta);
            temp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| self.write_error(e))?;
        }

        temp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        temp.persist(&self.path)
            .map_err(|err| self.write_error(err.error))?;

        #[cfg(unix)]
        if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
            warn!(dir = %dir.display(), error = %e, "Failed to sync store directory");
        }

        debug!(path = %self.path.display(), bytes = bytes.len(), "Replaced store");
        Ok(())
    }
}

/// Whether `file` is non-empty and its last byte is not a newline.
fn ends_mid_line(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
