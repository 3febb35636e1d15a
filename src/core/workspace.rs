//! Workspace layout
//!
//! Path model for the two colcon workspaces. One instance exists per
//! workspace per invocation; all derived paths are absolute as long as
//! the root is.

use std::path::{Path, PathBuf};

use crate::config::defaults;

/// A colcon workspace rooted under the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Workspace root directory
    pub root: PathBuf,
    /// Repos manifest imported into the source tree
    pub source_manifest: PathBuf,
}

impl Workspace {
    /// Host (toolchain) workspace under `output_dir`
    pub fn dev(output_dir: &Path, source_manifest: PathBuf) -> Self {
        Self {
            root: output_dir.join(defaults::DEV_WS_DIR),
            source_manifest,
        }
    }

    /// Target (cross-compiled) workspace under `output_dir`
    pub fn mcu(output_dir: &Path, source_manifest: PathBuf) -> Self {
        Self {
            root: output_dir.join(defaults::MCU_WS_DIR),
            source_manifest,
        }
    }

    /// Workspace name, for logging and error context
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map_or_else(|| self.root.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// Source tree the manifest is imported into
    pub fn src_dir(&self) -> PathBuf {
        self.root.join(defaults::SRC_DIR)
    }

    /// Install tree produced by colcon
    pub fn install_dir(&self) -> PathBuf {
        self.root.join(defaults::INSTALL_DIR)
    }

    /// Dedicated subdirectory of the source tree for extra packages
    pub fn extra_dir(&self) -> PathBuf {
        self.src_dir().join(defaults::EXTRA_PACKAGES_DIR)
    }
}
