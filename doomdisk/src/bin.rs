use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{extract_all, wrap_io_err, DiskFile, Error, Options, Progress, Summary};

/// Unpack the disk at `archive_path` into `base_dir`
pub fn extract(
    archive_path: impl AsRef<Path>,
    base_dir: impl AsRef<Path>,
    options: &Options,
    progress: &mut impl Progress,
) -> Result<Summary, Error> {
    let base_dir = base_dir.as_ref();
    let mut disk = DiskFile::new(archive_path)?;
    let table = disk.table().clone();

    let summary = extract_all(&mut disk, &table, base_dir, options, progress)?;
    log::info!(
        "{} -> {}: {} extracted, {} skipped, {} malformed",
        disk.path().display(),
        base_dir.display(),
        summary.extracted,
        summary.skipped,
        summary.malformed
    );
    Ok(summary)
}

/// The absolute input path without its extension, plus `_unpack`
pub fn default_output_dir(input: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let input = input.as_ref();
    let absolute = std::path::absolute(input).map_err(wrap_io_err!(input, "Resolving input"))?;

    let stem = absolute.with_extension("");
    let mut name = stem
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push("_unpack");
    Ok(stem.with_file_name(name))
}
