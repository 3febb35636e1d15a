//! Extra package source ingestion
//!
//! Zero or more additional sources are merged into the target source
//! tree, under `src/extra_packages`, isolated from the base-manifest
//! packages so a name collision can never overwrite a base package.
//!
//! Sources are processed in the order supplied. A directory-tree source
//! contributes each of its immediate subdirectories as a package,
//! replacing any same-named directory wholesale; a later source
//! therefore wins over an earlier one (last-write-wins, never a
//! file-by-file merge). A repos-manifest source is delegated to the
//! importer with the extra directory as destination.

use std::path::{Path, PathBuf};

use crate::core::orchestrator::Importer;
use crate::error::{FilesystemError, SourceError, UrosBuildError};
use crate::infra::filesystem;

/// An additional package source for the target workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraSource {
    /// A repos manifest handed to the importer
    Manifest(PathBuf),
    /// A directory whose immediate subdirectories are package trees
    Tree(PathBuf),
}

impl ExtraSource {
    /// Classify a user-supplied path: directories are package trees,
    /// files are repos manifests. Missing paths fail before any build
    /// starts.
    pub fn classify(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if path.is_dir() {
            Ok(Self::Tree(path.to_path_buf()))
        } else {
            Ok(Self::Manifest(path.to_path_buf()))
        }
    }

    /// The underlying path
    pub fn path(&self) -> &Path {
        match self {
            Self::Manifest(path) | Self::Tree(path) => path,
        }
    }
}

/// Merge all extra sources into `extra_dir`, in order.
pub fn ingest<I: Importer + ?Sized>(
    importer: &I,
    sources: &[ExtraSource],
    extra_dir: &Path,
) -> Result<(), UrosBuildError> {
    if sources.is_empty() {
        return Ok(());
    }
    filesystem::create_dir_all(extra_dir)?;

    for source in sources {
        match source {
            ExtraSource::Tree(root) => {
                tracing::info!("Merging package tree {}", root.display());
                copy_package_dirs(root, extra_dir)?;
            }
            ExtraSource::Manifest(manifest) => {
                tracing::info!("Importing extra manifest {}", manifest.display());
                importer.import(manifest, extra_dir)?;
            }
        }
    }
    Ok(())
}

/// Package directories contributed by a tree source: the immediate
/// subdirectories of `root`, sorted by name.
pub fn package_dirs(root: &Path) -> Result<Vec<(String, PathBuf)>, FilesystemError> {
    let entries = std::fs::read_dir(root).map_err(|e| FilesystemError::ReadFile {
        path: root.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FilesystemError::ReadFile {
            path: root.to_path_buf(),
            error: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Copy every package directory of a tree source into `dest`, replacing
/// same-named directories wholesale.
fn copy_package_dirs(root: &Path, dest: &Path) -> Result<(), UrosBuildError> {
    for (name, path) in package_dirs(root)? {
        let target = dest.join(&name);
        tracing::debug!("Replacing package directory {}", target.display());
        filesystem::remove_dir_all(&target)?;
        filesystem::copy_dir(&path, &target)?;
    }
    Ok(())
}
