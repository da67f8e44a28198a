#![no_main]
use libfuzzer_sys::fuzz_target;

use doomdisk_core::DiskSrc;

fuzz_target!(|data: &[u8]| {
    let mut src = data;
    if let Ok(table) = src.read_table() {
        assert_eq!(table.entries.len(), table.count as usize);

        let mut buf = [0; 256];
        for entry in table.entries.iter() {
            let _ = src.read_entry(&table, entry, 0, &mut buf);
            let _ = doomdisk::path::target_path("out", &entry.path());
        }
    }
});
