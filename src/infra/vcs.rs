//! vcs import invocation
//!
//! Source trees are populated by the external `vcs` tool; the manifest
//! contents are never interpreted here. Console output is inherited so
//! the user sees vcs progress directly.

use std::path::Path;
use std::process::Command;

use crate::core::orchestrator::Importer;
use crate::error::ImportError;

/// [`Importer`] backed by `vcs import`
#[derive(Debug, Clone, Copy, Default)]
pub struct VcsImporter;

impl Importer for VcsImporter {
    fn import(&self, manifest: &Path, dest: &Path) -> Result<(), ImportError> {
        let status = Command::new("vcs")
            .arg("import")
            .arg("--input")
            .arg(manifest)
            .arg(dest)
            .status()
            .map_err(|e| ImportError::Spawn {
                manifest: manifest.to_path_buf(),
                error: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ImportError::Failed {
                manifest: manifest.to_path_buf(),
                dest: dest.to_path_buf(),
                status: status.to_string(),
            })
        }
    }
}
