//! Project configuration (urosbuild.toml)
//!
//! An optional per-project file supplying defaults for the CLI flags.
//! Precedence is flag over file over built-in default; the file never
//! introduces behavior a flag cannot.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::{ConfigError, FilesystemError};

/// Parsed `urosbuild.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Build defaults
    #[serde(default)]
    pub build: BuildSection,

    /// Target workspace defaults
    #[serde(default)]
    pub target: TargetSection,
}

/// `[build]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BuildSection {
    /// Build in Debug mode
    #[serde(default)]
    pub debug: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Clean the output directory before building
    #[serde(default = "default_clean")]
    pub clean: bool,

    /// Output directory, relative to the project directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// `[target]` section
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TargetSection {
    /// Replacement for the baseline mcu repos manifest
    #[serde(default)]
    pub packages: Option<PathBuf>,

    /// Metadata override, merged after the baseline
    #[serde(default)]
    pub meta: Option<PathBuf>,

    /// Toolchain override
    #[serde(default)]
    pub toolchain: Option<PathBuf>,

    /// Extra package sources (repos manifests or package trees)
    #[serde(default)]
    pub extra_sources: Vec<PathBuf>,
}

fn default_clean() -> bool {
    true
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            clean: default_clean(),
            output_dir: None,
        }
    }
}

impl ProjectConfig {
    /// Parse a config from TOML content.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `urosbuild.toml` from the project directory, if present.
    pub fn load(project_dir: &Path) -> Result<Option<Self>, crate::error::UrosBuildError> {
        let path = project_dir.join(defaults::PROJECT_CONFIG);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| FilesystemError::ReadFile {
                path: path.clone(),
                error: e.to_string(),
            })?;
        Ok(Some(Self::from_toml(&path, &content)?))
    }
}
