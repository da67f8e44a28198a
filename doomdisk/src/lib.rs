mod bin;
mod disk;
pub mod ext;
mod extract;
pub mod path;
mod progress;

pub use bin::*;
pub use disk::*;
pub use extract::*;
pub use progress::*;

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

const READ_WRITE_BUF_SIZE: usize = 4 * 1024 * 1024;

#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] doomdisk_core::Error),

    #[error("{context}{}", path_suffix(.path))]
    Io {
        source: io::Error,
        path: Option<PathBuf>,
        context: &'static str,
    },

    #[error("Failed to create directory {path}")]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("Failed to create file {path}")]
    FileCreate { path: PathBuf, source: io::Error },

    #[error("Failed to write file {path}")]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("Entry data truncated for {path}: expected {expected} bytes, got {actual}")]
    CopyTruncated {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Malformed entry path {entry:?}: more than one root marker")]
    MalformedPath { entry: String },

    #[error("Invalid path component {component} in entry {entry:?}")]
    InvalidPath { entry: String, component: PathBuf },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" ({})", path.display()),
        None => String::new(),
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;

        let mut source = self.source();
        while let Some(err) = source {
            writeln!(f, "\tCaused by: {err}")?;
            source = err.source();
        }

        Ok(())
    }
}

/// Build a closure mapping an `io::Error` to `Error::Io` for `path`
#[macro_export]
macro_rules! wrap_io_err {
    ($path:expr, $context:expr) => {
        |source| $crate::Error::Io {
            source,
            path: Some($path.to_path_buf()),
            context: $context,
        }
    };
}
