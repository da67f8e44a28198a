//! Extention traits for base types defined in `doomdisk-core`.
use std::io::Write;
use std::path::{Path, PathBuf};

use doomdisk_core::{DiskSrc, Entry, Table};

use crate::Error;

pub trait EntryExt {
    /// Sanitized location of this entry under `base_dir`
    fn target_path(&self, base_dir: impl AsRef<Path>) -> Result<PathBuf, Error>;
}

impl EntryExt for Entry {
    fn target_path(&self, base_dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        crate::path::target_path(base_dir, &self.path())
    }
}

/// Copy exactly `entry.size()` bytes of entry data from `src` into `write`.
///
/// `target` is only used for error context. Returns the number of bytes
/// copied, which always equals the entry size.
pub fn copy_entry<Src, W>(
    src: &mut Src,
    table: &Table,
    entry: &Entry,
    mut write: W,
    target: &Path,
    buf: &mut [u8],
) -> Result<u64, Error>
where
    Src: DiskSrc<Err = Error>,
    W: Write,
{
    let expected = u64::from(entry.size());
    let mut total = 0;
    while total < expected {
        let count = src.read_entry(table, entry, total, buf)?;
        if count == 0 {
            return Err(Error::CopyTruncated {
                path: target.to_path_buf(),
                expected,
                actual: total,
            });
        }
        write
            .write_all(&buf[..count])
            .map_err(|source| Error::FileWrite {
                path: target.to_path_buf(),
                source,
            })?;
        total += count as u64;
    }
    Ok(total)
}
