//! String and filesystem primitives used while walking sysfs.
//!
//! Everything here works on plain `&str` paths and never fails: a missing
//! file, a dangling symlink or a permission error all collapse into an empty
//! string or `false`. Absence is the normal case in sysfs, so callers treat
//! the empty value as "no metadata" rather than as an error.

use {
    crate::error::Result,
    log::trace,
    std::{
        fs::{self, File},
        io::{BufRead, BufReader},
    },
};

/// Return the final component of `path`.
///
/// A path without any separator is returned unchanged.
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Return everything before the final separator of `path`.
///
/// A root-level path (`/x`) yields `/`. A path without any separator is
/// returned unchanged.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        None => path,
        Some(0) => "/",
        Some(pos) => &path[..pos],
    }
}

/// Whether `path` can be stat'ed. Symlinks are followed, so a dangling link
/// reports `false`.
pub fn path_exists(path: &str) -> bool {
    !path.is_empty() && fs::metadata(path).is_ok()
}

/// Resolve symlinks and relative components into an absolute path.
///
/// Returns an empty string if resolution fails.
pub fn resolve_real_path(path: &str) -> String {
    match fs::canonicalize(path) {
        Ok(real) => real
            .to_string_lossy()
            .into_owned(),
        Err(e) => {
            trace!("Cannot resolve {path}: {e}");
            String::new()
        },
    }
}

/// Read the first line of a text file without its trailing newline.
///
/// Returns an empty string when the file is missing, unreadable or empty.
pub fn read_first_line(path: &str) -> String {
    match try_read_first_line(path) {
        Ok(line) => line,
        Err(e) => {
            trace!("Cannot read {path}: {e}");
            String::new()
        },
    }
}

fn try_read_first_line(path: &str) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;

    if line.last() == Some(&b'\n') {
        line.pop();
    }

    // Descriptor strings are not guaranteed to be UTF-8
    Ok(String::from_utf8_lossy(&line).into_owned())
}
