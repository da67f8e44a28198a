//! The packed struct represents one record of the on-disk directory table
use alloc::string::String;
use core::fmt::Display;

use bytemuck::{Pod, Zeroable};

use crate::{Error, PATH_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Entry {
    /// NUL-padded ASCII path, possibly with a `root:` prefix
    pub path: [u8; PATH_SIZE],
    /// Big-endian offset of file data, relative to the end of the table
    pub offset: [u8; 4],
    /// Big-endian size in bytes of the file data
    pub size: [u8; 4],
}

impl Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "path={:?} offset={} size={}",
            self.path(),
            self.offset(),
            self.size()
        )
    }
}

impl Entry {
    pub fn new(path: &str, offset: u32, size: u32) -> Result<Entry, Error> {
        let bytes = path.as_bytes();
        if bytes.len() > PATH_SIZE {
            return Err(Error::PathTooLong(bytes.len()));
        }

        let mut entry = Entry::zeroed();
        entry.path[..bytes.len()].copy_from_slice(bytes);
        entry.offset = offset.to_be_bytes();
        entry.size = size.to_be_bytes();
        Ok(entry)
    }

    pub fn offset(&self) -> u32 {
        u32::from_be_bytes(self.offset)
    }

    pub fn size(&self) -> u32 {
        u32::from_be_bytes(self.size)
    }

    /// Retrieve the path, ending at the first NUL or at the end of the field
    pub fn path_bytes(&self) -> &[u8] {
        let end = self
            .path
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.path.len());
        &self.path[..end]
    }

    /// Decode the path as ASCII; bytes outside of ASCII become `?`
    pub fn path(&self) -> String {
        self.path_bytes()
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect()
    }
}
