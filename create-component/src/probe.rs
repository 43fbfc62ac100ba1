//! Filesystem probing.
//!
//! Every access failure (not found, permission denied, broken link) reads as "missing".
//! Callers never see an error from this module.

use std::fs;
use std::path::Path;

/// Kind of filesystem entry found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Missing,
    File,
    Directory,
    Other,
}

/// Returns true if `path` can be accessed.
pub fn exists(path: &Path) -> bool {
    probe(path) != PathKind::Missing
}

/// Reports what lives at `path`, following symlinks.
pub fn probe(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        Ok(meta) if meta.is_file() => PathKind::File,
        Ok(_) => PathKind::Other,
        Err(e) => {
            log::trace!("Probe of {} failed: {}", path.display(), e);
            PathKind::Missing
        }
    }
}
