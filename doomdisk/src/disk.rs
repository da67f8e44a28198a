use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use doomdisk_core::{DiskSrc, Table};

use crate::{wrap_io_err, Error};

/// A disk archive on the filesystem. The file stays open for the lifetime of
/// this struct and is repositioned before every read.
#[derive(Debug)]
pub struct DiskFile {
    path: PathBuf,
    src: BufReader<File>,
    table: Table,
}

impl DiskFile {
    pub fn new(path: impl AsRef<Path>) -> Result<DiskFile, Error> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .read(true)
            .open(&path)
            .map_err(wrap_io_err!(path, "Opening disk"))?;

        let mut new = DiskFile {
            path,
            src: BufReader::new(file),

            // Blank until the table is read through DiskSrc
            table: Table::default(),
        };

        new.table = new.read_table()?;
        log::info!(
            "{}: {} entries, {} data bytes at offset {}",
            new.path.display(),
            new.table.count,
            new.table.data_size,
            new.table.data_offset
        );
        Ok(new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl DiskSrc for DiskFile {
    type Err = Error;

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Error> {
        self.src
            .seek(SeekFrom::Start(offset))
            .map_err(wrap_io_err!(self.path, "Seeking disk"))?;

        // Short only when the file ends
        let mut window = (&mut self.src).take(buf.len() as u64);
        let count = io::copy(&mut window, &mut Cursor::new(buf))
            .map_err(wrap_io_err!(self.path, "Reading disk"))?;
        Ok(usize::try_from(count).map_err(doomdisk_core::Error::from)?)
    }
}
