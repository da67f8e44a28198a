use alloc::vec::Vec;

use crate::{Entry, Error, COUNT_SIZE, DATA_SIZE_SIZE, ENTRY_SIZE};

/// The directory table at the start of a disk, fully read into memory
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Count of Entry structs, which start immediately after the count
    pub count: u32,
    /// Entries in on-disk order, which is also extraction order
    pub entries: Vec<Entry>,
    /// Total size of the data region, as recorded after the entries
    pub data_size: u32,
    /// Absolute position of the data region; entry offsets are relative to it
    pub data_offset: u64,
}

impl Table {
    /// Retrieve the size of `count` entries
    pub fn entries_size(count: u32) -> Result<u64, Error> {
        u64::from(count)
            .checked_mul(ENTRY_SIZE as u64)
            .ok_or(Error::Overflow)
    }

    /// Retrieve the position of the data region for a table of `count` entries
    pub fn data_offset_for(count: u32) -> Result<u64, Error> {
        Self::entries_size(count)?
            .checked_add((COUNT_SIZE + DATA_SIZE_SIZE) as u64)
            .ok_or(Error::Overflow)
    }

    /// Absolute position of an entry's data
    pub fn entry_offset(&self, entry: &Entry) -> Result<u64, Error> {
        self.data_offset
            .checked_add(u64::from(entry.offset()))
            .ok_or(Error::Overflow)
    }
}
