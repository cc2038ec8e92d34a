// SPDX-License-Identifier: Apache-2.0

// One durable file per entry. Writes go through a named temp file in
// the same directory followed by a rename, so a crash mid-write leaves
// either the old content or the new content, never a torn file. The
// temp file lives next to its target because rename is only atomic
// within one filesystem.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;

// A crash between write and rename leaves the temp file behind.
// '#' never appears in an entry filename, so loaders skip leftover
// temp files as foreign names instead of reading them as entries.
pub const TMP_PREFIX: &str = "#tmp-";

pub fn write(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = path.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{:?} has no parent directory", path),
        )
    })?;

    let mut tmp = Builder::new().prefix(TMP_PREFIX).tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn read(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

// Absent files are fine: the entry is gone either way.
pub fn delete(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
