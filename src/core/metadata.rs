//! Build metadata and toolchain resolution
//!
//! Combines baseline configuration files with optional user overrides.
//! colcon applies later `--metas` entries over earlier ones, so ordering
//! is part of the contract: base first, override last.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Resolve the colcon metadata file list for the target build.
///
/// The base file must exist; the override is optional but must exist
/// when supplied. The returned order is always `[base, override?]`.
pub fn resolve_metadata(
    base: &Path,
    override_path: Option<&Path>,
) -> Result<Vec<PathBuf>, ConfigError> {
    if !base.exists() {
        return Err(ConfigError::MetadataNotFound {
            path: base.to_path_buf(),
        });
    }

    let mut metas = vec![base.to_path_buf()];
    if let Some(path) = override_path {
        if !path.exists() {
            return Err(ConfigError::OverrideNotFound {
                path: path.to_path_buf(),
            });
        }
        metas.push(path.to_path_buf());
    }
    Ok(metas)
}

/// Resolve the CMake toolchain file for the target build.
///
/// CMake accepts a single toolchain file, so a supplied override wins
/// over the baseline; the baseline is used only when it exists on disk.
/// `None` means a native host build.
pub fn resolve_toolchain(
    base: Option<&Path>,
    override_path: Option<&Path>,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = override_path {
        if !path.exists() {
            return Err(ConfigError::ToolchainNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    Ok(base.filter(|p| p.exists()).map(Path::to_path_buf))
}
