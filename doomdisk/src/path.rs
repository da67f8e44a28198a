//! Turn archive entry paths into safe paths relative to an output directory.
//!
//! Entry paths may carry a drive-letter style root (`C:\foo\bar`). The root
//! name is kept as a bracketed leading directory, so `C:\foo\bar` unpacks to
//! `[C]/foo/bar` and entries from different roots never collide.
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::Error;

const ROOT_MARKER: char = ':';

fn strip_separator(path: &str) -> &str {
    path.strip_prefix(MAIN_SEPARATOR).unwrap_or(path)
}

/// Sanitize a raw entry path into a relative path.
///
/// Backslashes become the native separator. A `root:` prefix becomes a
/// `[root]` leading component, and a single leading separator is dropped.
/// More than one root marker is rejected with `Error::MalformedPath`.
pub fn sanitize(raw: &str) -> Result<PathBuf, Error> {
    let native = raw.replace('\\', MAIN_SEPARATOR_STR);

    let path = match native.split_once(ROOT_MARKER) {
        Some((root, relative)) => {
            let relative = strip_separator(relative);
            if relative.contains(ROOT_MARKER) {
                return Err(Error::MalformedPath {
                    entry: raw.to_string(),
                });
            }
            Path::new(&format!("[{}]", root)).join(relative)
        }
        None => PathBuf::from(native),
    };

    // Joining an absolute remainder drops the root component, so this has to
    // happen after the rewrite as well
    Ok(match path.to_str() {
        Some(s) => PathBuf::from(strip_separator(s)),
        None => path,
    })
}

/// Ensure there are no components that could leave the output directory.
///
/// This is stricter than the reference unpacker, which would write `..\x`
/// outside of the output directory; it is not one of the rewrite rules.
pub fn check_path<'a>(raw: &str, path: &'a Path) -> Result<&'a Path, Error> {
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            invalid => {
                let bad_component: &Path = invalid.as_ref();
                return Err(Error::InvalidPath {
                    entry: raw.to_string(),
                    component: bad_component.to_path_buf(),
                });
            }
        }
    }
    Ok(path)
}

/// Sanitize `raw` and join it onto `base_dir`
pub fn target_path(base_dir: impl AsRef<Path>, raw: &str) -> Result<PathBuf, Error> {
    let relative = sanitize(raw)?;
    check_path(raw, &relative)?;
    Ok(base_dir.as_ref().join(relative))
}
