//! Shell-style path pattern expansion.

use {
    crate::error::Result,
    log::{debug, trace},
};

/// Expand each pattern against the filesystem, in the order given.
///
/// Matches for a single pattern come back in the order the `glob` crate
/// yields them (sorted). Results of successive patterns are appended as is,
/// so a path matched by two patterns appears twice. A malformed pattern or a
/// pattern with no matches contributes nothing.
pub fn expand<I, S>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        match expand_one(pattern) {
            Ok(paths) => {
                trace!("Pattern {pattern} matched {} path(s)", paths.len());
                found.extend(paths);
            },
            Err(e) => debug!("Skipping pattern {pattern}: {e}"),
        }
    }

    found
}

fn expand_one(pattern: &str) -> Result<Vec<String>> {
    let mut paths = Vec::new();

    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) => paths.push(
                path.to_string_lossy()
                    .into_owned(),
            ),
            // Unreadable directories along the way are not fatal
            Err(e) => trace!("Glob entry error for {pattern}: {e}"),
        }
    }

    Ok(paths)
}
