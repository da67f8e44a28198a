use std::fs::{self, File};
use std::path::Path;

use doomdisk_core::{DiskSrc, Table};

use crate::ext::{copy_entry, EntryExt};
use crate::{Error, Progress, READ_WRITE_BUF_SIZE};

/// What to do with an entry whose path has more than one root marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole run. Files already written are left in place.
    #[default]
    Abort,
    /// Log the entry, count it and carry on with the next one
    Skip,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Replace files that already exist at an entry's target path
    pub overwrite: bool,
    pub malformed: MalformedPolicy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub extracted: usize,
    /// Entries left alone because their target already existed
    pub skipped: usize,
    /// Entries dropped under `MalformedPolicy::Skip`
    pub malformed: usize,
}

/// Unpack every entry of `table` from `src` into `base_dir`, in table order.
///
/// The first error ends the run; nothing already written is rolled back.
pub fn extract_all<Src, P>(
    src: &mut Src,
    table: &Table,
    base_dir: impl AsRef<Path>,
    options: &Options,
    progress: &mut P,
) -> Result<Summary, Error>
where
    Src: DiskSrc<Err = Error>,
    P: Progress + ?Sized,
{
    let base_dir = base_dir.as_ref();
    let total = table.entries.len();
    let mut summary = Summary::default();
    let mut buf = vec![0; READ_WRITE_BUF_SIZE];

    for (index, entry) in table.entries.iter().enumerate() {
        let current = index + 1;
        let raw_path = entry.path();

        let target_path = match entry.target_path(base_dir) {
            Ok(target_path) => target_path,
            Err(Error::MalformedPath { entry: raw })
                if options.malformed == MalformedPolicy::Skip =>
            {
                log::warn!("Skipping malformed entry {:?}", raw);
                summary.malformed += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        if !options.overwrite && target_path.is_file() {
            log::debug!("Skipping existing {}", target_path.display());
            progress.skipped(current, total, &raw_path);
            summary.skipped += 1;
            continue;
        }

        progress.extracting(current, total, &raw_path);

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut target_file = File::create(&target_path).map_err(|source| Error::FileCreate {
            path: target_path.clone(),
            source,
        })?;

        let size = copy_entry(src, table, entry, &mut target_file, &target_path, &mut buf)?;
        log::debug!("{} -> {} ({} bytes)", raw_path, target_path.display(), size);

        summary.extracted += 1;
    }

    Ok(summary)
}
