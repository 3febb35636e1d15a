//! Command-line interface module
//!
//! This module handles argument parsing and output formatting. It
//! contains no business logic - that belongs in the [`crate::core`]
//! module.

pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::options::{BuildOptions, BuildType};
use crate::core::orchestrator::{Orchestrator, RunSummary};
use crate::core::plan::{BuildPlan, PlanRequest};
use crate::core::preflight;
use crate::core::project::ProjectConfig;
use crate::infra::colcon::ColconRunner;
use crate::infra::python;
use crate::infra::vcs::VcsImporter;

/// urosbuild - Two-stage micro-ROS firmware build orchestrator
///
/// Builds the dev_ws toolchain workspace, then cross-compiles the
/// mcu_ws workspace against its install tree.
#[derive(Parser, Debug)]
#[command(name = "urosbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build in Debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not clean the output directory before building
    #[arg(short = 'x', long = "no-clean")]
    pub no_clean: bool,

    /// Output directory for build artifacts
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding the baseline .repos/.meta/.cmake files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Toolchain file merged after the baseline, mcu_ws only
    #[arg(long, value_name = "FILE")]
    pub toolchain: Option<PathBuf>,

    /// Metadata file merged after the baseline, mcu_ws only
    #[arg(long, value_name = "FILE")]
    pub meta: Option<PathBuf>,

    /// Replacement for the baseline mcu_ws repos manifest
    #[arg(long, value_name = "FILE")]
    pub mcu_packages: Option<PathBuf>,

    /// Extra package source (repos manifest or package tree), repeatable
    #[arg(long = "extra-source", value_name = "PATH")]
    pub extra_sources: Vec<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Execute the build.
    pub fn run(self) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        let project_dir = absolute(&cwd, self.project_dir.clone());

        let config = ProjectConfig::load(&project_dir)
            .with_context(|| format!("Failed to load {}", defaults::PROJECT_CONFIG))?
            .unwrap_or_default();

        preflight::require_tools().context("Preflight check failed")?;
        let python_minor =
            python::detect_python_minor().context("Preflight check failed")?;
        let prior_pythonpath = std::env::var(defaults::PYTHONPATH).ok();

        let request = self.to_request(&cwd, &project_dir, &config);
        tracing::info!(
            project_dir = %request.project_dir.display(),
            output_dir = %request.options.output_dir.display(),
            build_type = %request.options.build_type,
            "resolved build inputs"
        );

        let plan = BuildPlan::resolve(request, python_minor, prior_pythonpath)?;
        let orchestrator = Orchestrator::new(VcsImporter, ColconRunner);
        let summary = orchestrator.run(&plan)?;

        self.report(&summary)
    }

    /// Merge CLI flags with project-config values (flag wins, file over
    /// built-in default) into a plan request.
    fn to_request(&self, cwd: &Path, project_dir: &Path, config: &ProjectConfig) -> PlanRequest {
        let build_type = if self.debug || config.build.debug {
            BuildType::Debug
        } else {
            BuildType::Release
        };
        let verbose = self.verbose || config.build.verbose;
        let clean = if self.no_clean { false } else { config.build.clean };

        let output_dir = match (&self.output_dir, &config.build.output_dir) {
            (Some(dir), _) => absolute(cwd, dir.clone()),
            (None, Some(dir)) => absolute(project_dir, dir.clone()),
            (None, None) => project_dir.join(defaults::DEFAULT_OUTPUT_DIR),
        };

        let pick = |flag: &Option<PathBuf>, file: &Option<PathBuf>| match (flag, file) {
            (Some(path), _) => Some(absolute(cwd, path.clone())),
            (None, Some(path)) => Some(absolute(project_dir, path.clone())),
            (None, None) => None,
        };

        let extra_sources = if self.extra_sources.is_empty() {
            config
                .target
                .extra_sources
                .iter()
                .map(|p| absolute(project_dir, p.clone()))
                .collect()
        } else {
            self.extra_sources
                .iter()
                .map(|p| absolute(cwd, p.clone()))
                .collect()
        };

        PlanRequest {
            project_dir: project_dir.to_path_buf(),
            options: BuildOptions {
                build_type,
                verbose,
                clean,
                output_dir,
            },
            mcu_packages: pick(&self.mcu_packages, &config.target.packages),
            meta_override: pick(&self.meta, &config.target.meta),
            toolchain_override: pick(&self.toolchain, &config.target.toolchain),
            extra_sources,
        }
    }

    /// Print the run summary.
    fn report(&self, summary: &RunSummary) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(summary).context("Failed to encode summary")?
            );
        } else {
            println!("{} Build complete!", output::status::SUCCESS);
            println!("  dev_ws install: {}", summary.dev_install.display());
            println!("  mcu_ws install: {}", summary.mcu_install.display());
            println!("  CMake config:   {}", summary.cmake_config.display());
        }
        Ok(())
    }
}

/// Resolve a possibly-relative path against a base directory.
fn absolute(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
