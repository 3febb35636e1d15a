//! Core orchestration logic
//!
//! Business logic for the two-workspace build. External tools are only
//! reached through the capability traits in [`orchestrator`]; the
//! implementations live in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`options`] - Build options and their colcon/CMake flag mapping
//! - [`workspace`] - Workspace path model
//! - [`filter`] - Target build package deny-list
//! - [`metadata`] - Metadata and toolchain file resolution
//! - [`bridge`] - Cross-workspace environment bridge
//! - [`ingest`] - Extra package source ingestion
//! - [`cmake_config`] - Downstream CMake config generation
//! - [`project`] - Optional urosbuild.toml project configuration
//! - [`preflight`] - PATH checks for the external tools
//! - [`plan`] - Fail-fast plan resolution
//! - [`orchestrator`] - The sequential build pipeline

pub mod bridge;
pub mod cmake_config;
pub mod filter;
pub mod ingest;
pub mod metadata;
pub mod options;
pub mod orchestrator;
pub mod plan;
pub mod preflight;
pub mod project;
pub mod workspace;
