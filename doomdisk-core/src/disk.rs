use alloc::vec::Vec;

use crate::{Entry, Error, Table, COUNT_SIZE, DATA_SIZE_SIZE, ENTRY_SIZE};

pub trait DiskSrc {
    type Err: From<Error>;

    /// Read up to `buf.len()` bytes at `offset`. Returns fewer bytes only when
    /// the source ends.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Err>;

    /// Like `read_at`, but a short read is an `Error::Truncated`
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), Self::Err> {
        let count = self.read_at(offset, buf)?;
        if count != buf.len() {
            return Err(Error::Truncated {
                offset,
                expected: buf.len(),
                actual: count,
            }
            .into());
        }
        Ok(())
    }

    fn read_u32_at(&mut self, offset: u64) -> Result<u32, Self::Err> {
        let mut data = [0; 4];
        self.read_exact_at(offset, &mut data)?;
        Ok(u32::from_be_bytes(data))
    }

    /// Read the entry count, every entry and the trailing data size.
    ///
    /// The table is parsed entry by entry, so a bogus count on a short source
    /// fails with `Truncated` instead of allocating for the whole count.
    fn read_table(&mut self) -> Result<Table, Self::Err> {
        let count = self.read_u32_at(0)?;

        let mut entries = Vec::new();
        let mut offset = COUNT_SIZE as u64;
        for _ in 0..count {
            let mut data = [0; ENTRY_SIZE];
            self.read_exact_at(offset, &mut data)?;
            entries.push(bytemuck::pod_read_unaligned::<Entry>(&data));
            offset += ENTRY_SIZE as u64;
        }

        let data_size = self.read_u32_at(offset)?;
        let data_offset = offset + DATA_SIZE_SIZE as u64;
        debug_assert_eq!(Some(data_offset), Table::data_offset_for(count).ok());

        Ok(Table {
            count,
            entries,
            data_size,
            data_offset,
        })
    }

    /// Read from this src at a given entry's data with a given offset within that entry
    fn read_entry(
        &mut self,
        table: &Table,
        entry: &Entry,
        offset: u64,
        buf: &mut [u8],
    ) -> Result<usize, Self::Err> {
        let size = u64::from(entry.size());
        if offset >= size {
            return Ok(0);
        }

        let remaining = usize::try_from(size - offset).map_err(Error::from)?;
        let end = remaining.min(buf.len());

        let start = table
            .entry_offset(entry)?
            .checked_add(offset)
            .ok_or(Error::Overflow)?;

        self.read_at(start, &mut buf[..end])
    }
}

impl<T: AsRef<[u8]>> DiskSrc for T {
    type Err = Error;

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Error> {
        let data = self.as_ref();
        let start = match usize::try_from(offset) {
            Ok(start) if start < data.len() => start,
            _ => return Ok(0),
        };
        let count = buf.len().min(data.len() - start);
        buf[..count].copy_from_slice(&data[start..start + count]);
        Ok(count)
    }
}
