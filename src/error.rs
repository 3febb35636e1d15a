//! Error types for urosbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Build configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Base metadata file missing
    #[error("Base colcon metadata file not found: {path}")]
    MetadataNotFound { path: PathBuf },

    /// User-supplied metadata override missing
    #[error("Metadata override file not found: {path}")]
    OverrideNotFound { path: PathBuf },

    /// User-supplied toolchain file missing
    #[error("Toolchain file not found: {path}")]
    ToolchainNotFound { path: PathBuf },

    /// Project config parse error
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Extra package source errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// Extra source path does not exist
    #[error("Extra package source not found: {path}")]
    NotFound { path: PathBuf },
}

/// Source import errors
#[derive(Error, Debug)]
pub enum ImportError {
    /// vcs returned a non-zero exit status
    #[error("Importing '{manifest}' into '{dest}' failed with {status}")]
    Failed {
        manifest: PathBuf,
        dest: PathBuf,
        status: String,
    },

    /// vcs could not be spawned
    #[error("Failed to run vcs for '{manifest}': {error}")]
    Spawn { manifest: PathBuf, error: String },
}

/// Workspace build errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// colcon returned a non-zero exit status
    #[error("Building workspace '{workspace}' failed with {status}")]
    Failed { workspace: String, status: String },

    /// colcon could not be spawned
    #[error("Failed to run colcon in workspace '{workspace}': {error}")]
    Spawn { workspace: String, error: String },

    /// Required tools are missing from PATH
    #[error("Required tools not found in PATH: {}", tools.join(", "))]
    MissingTools { tools: Vec<String> },

    /// python3 version could not be determined
    #[error("Failed to determine python3 version: {error}")]
    PythonProbe { error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to copy a directory tree
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyDir {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level urosbuild error type
#[derive(Error, Debug)]
pub enum UrosBuildError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Extra source error
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Import error
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// IO error
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}
