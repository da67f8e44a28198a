/// Receives a notice for every entry the extractor processes
pub trait Progress {
    /// `current` is 1-based; `path` is the entry path as stored in the disk
    fn extracting(&mut self, current: usize, total: usize, path: &str);

    fn skipped(&mut self, _current: usize, _total: usize, _path: &str) {}
}

/// Reports nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct Quiet;

impl Progress for Quiet {
    fn extracting(&mut self, _current: usize, _total: usize, _path: &str) {}
}

/// Prints one line per extracted entry to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn line(current: usize, total: usize, path: &str) -> String {
        let width = total.to_string().len();
        format!("[{:0width$}/{}] {}", current, total, path, width = width)
    }
}

impl Progress for ConsoleProgress {
    fn extracting(&mut self, current: usize, total: usize, path: &str) {
        println!("{}", Self::line(current, total, path));
    }
}
