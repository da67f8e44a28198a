#![no_std]
extern crate alloc;

use core::mem;

pub use crate::disk::DiskSrc;
pub use crate::entry::Entry;
pub use crate::error::Error;
pub use crate::table::Table;

mod disk;
mod entry;
mod error;
mod table;


/// Size of the leading entry count
pub const COUNT_SIZE: usize = mem::size_of::<u32>();
/// Size of the trailing total data size, which ends the table
pub const DATA_SIZE_SIZE: usize = mem::size_of::<u32>();
pub const ENTRY_SIZE: usize = mem::size_of::<Entry>();
pub const PATH_SIZE: usize = 64;
