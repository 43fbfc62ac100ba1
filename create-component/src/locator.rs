//! Discovery of the project's components directory.
//!
//! Candidates from [`ScaffoldConfig`] are checked in order relative to a project root;
//! the first one that is a directory wins. When none matches, the fallback folder is
//! created (with parents) and used instead.

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::probe::{self, PathKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of locating the components directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentsDir {
    /// An existing candidate folder.
    Found(PathBuf),
    /// The fallback folder, created by this call.
    Created(PathBuf),
}

impl ComponentsDir {
    pub fn path(&self) -> &Path {
        match self {
            ComponentsDir::Found(p) | ComponentsDir::Created(p) => p,
        }
    }
}

/// Returns the first candidate under `root` that is an existing directory.
///
/// Candidates that exist as regular files are skipped.
pub fn find_components_dir(root: &Path, config: &ScaffoldConfig) -> Option<PathBuf> {
    config
        .candidates
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| {
            let kind = probe::probe(path);
            log::debug!("Candidate {} -> {:?}", path.display(), kind);
            kind == PathKind::Directory
        })
}

/// Finds the components directory under `root`, creating the fallback if needed.
///
/// # Errors
///
/// Returns [`ScaffoldError::CreateComponentsDir`] if the fallback cannot be created.
pub fn locate(root: &Path, config: &ScaffoldConfig) -> Result<ComponentsDir> {
    if let Some(found) = find_components_dir(root, config) {
        log::info!("Using components directory {}", found.display());
        return Ok(ComponentsDir::Found(found));
    }

    let fallback = root.join(&config.fallback);
    log::info!("No components directory found, creating {}", fallback.display());
    fs::create_dir_all(&fallback).map_err(|source| ScaffoldError::CreateComponentsDir {
        path: fallback.clone(),
        source,
    })?;

    Ok(ComponentsDir::Created(fallback))
}
