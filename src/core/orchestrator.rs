//! Build orchestration
//!
//! Runs one invocation end to end: optional clean, host workspace
//! (import then build), environment bridge derivation, target workspace
//! (import, extra-source ingestion, filtered cross-build), and the
//! downstream CMake config. Strictly sequential; the target build has a
//! hard data dependency on the host install tree. Any failure aborts the
//! run, and the config file is only written after both builds succeed.
//!
//! External tools are reached through the [`Importer`] and
//! [`BuildRunner`] capability traits so the sequencing is testable
//! without spawning processes.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::bridge::EnvironmentBridge;
use crate::core::ingest;
use crate::core::plan::BuildPlan;
use crate::core::workspace::Workspace;
use crate::error::{BuildError, ImportError, UrosBuildError};
use crate::infra::filesystem;

/// Populates a source tree from a repos manifest
pub trait Importer {
    /// Import every repository named by `manifest` into `dest`.
    fn import(&self, manifest: &Path, dest: &Path) -> Result<(), ImportError>;
}

/// Invokes the external build tool for one workspace
pub trait BuildRunner {
    /// Run `colcon` with `args`, rooted at `workspace_root`, with `env`
    /// set on the child process.
    fn build(
        &self,
        workspace_root: &Path,
        args: &[String],
        env: &[(String, String)],
    ) -> Result<(), BuildError>;
}

/// Install locations of a completed run
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    /// Host workspace install tree
    pub dev_install: PathBuf,
    /// Target workspace install tree
    pub mcu_install: PathBuf,
    /// Downstream CMake config
    pub cmake_config: PathBuf,
}

/// Sequential two-workspace build driver
pub struct Orchestrator<I, B> {
    importer: I,
    runner: B,
}

impl<I: Importer, B: BuildRunner> Orchestrator<I, B> {
    /// Create an orchestrator over the given collaborators.
    pub fn new(importer: I, runner: B) -> Self {
        Self { importer, runner }
    }

    /// Run the whole pipeline for a validated plan.
    pub fn run(&self, plan: &BuildPlan) -> Result<RunSummary, UrosBuildError> {
        if plan.options.clean {
            println!("--> Cleaning build directory...");
            filesystem::remove_dir_all(&plan.options.output_dir)?;
        }

        println!("--> Building dev_ws...");
        self.import_workspace(&plan.dev)?;
        self.runner
            .build(&plan.dev.root, &dev_build_args(plan), &[])?;

        let bridge = EnvironmentBridge::derive(
            &plan.dev.install_dir(),
            plan.python_minor,
            plan.prior_pythonpath.as_deref(),
        );
        tracing::debug!(?bridge, "derived cross-workspace environment");

        println!("--> Building mcu_ws...");
        self.import_workspace(&plan.mcu)?;
        ingest::ingest(&self.importer, &plan.extra_sources, &plan.mcu.extra_dir())?;
        self.runner
            .build(&plan.mcu.root, &mcu_build_args(plan), &bridge.vars())?;

        println!("--> Generating CMake config...");
        let cmake_config = crate::core::cmake_config::emit(
            &plan.options.output_dir,
            &plan.dev.install_dir(),
            &plan.mcu.install_dir(),
            plan.python_minor,
        )?;

        Ok(RunSummary {
            dev_install: plan.dev.install_dir(),
            mcu_install: plan.mcu.install_dir(),
            cmake_config,
        })
    }

    /// Create the source tree and run the one import of a workspace.
    fn import_workspace(&self, workspace: &Workspace) -> Result<(), UrosBuildError> {
        filesystem::create_dir_all(&workspace.src_dir())?;
        tracing::info!(
            workspace = %workspace.name(),
            manifest = %workspace.source_manifest.display(),
            "importing sources"
        );
        self.importer
            .import(&workspace.source_manifest, &workspace.src_dir())?;
        Ok(())
    }
}

/// colcon arguments for the host workspace build.
pub fn dev_build_args(plan: &BuildPlan) -> Vec<String> {
    let options = &plan.options;
    vec![
        "build".to_string(),
        "--merge-install".to_string(),
        "--event-handlers".to_string(),
        options.event_handlers().to_string(),
        "--cmake-args".to_string(),
        "-DBUILD_TESTING=OFF".to_string(),
        format!("-DCMAKE_BUILD_TYPE={}", options.build_type),
        format!("-DCMAKE_VERBOSE_MAKEFILE={}", options.verbose_makefile()),
    ]
}

/// colcon arguments for the target workspace build: merged metadata,
/// static cross-compile flags, the optional toolchain, and the package
/// deny-list.
pub fn mcu_build_args(plan: &BuildPlan) -> Vec<String> {
    let options = &plan.options;
    let mut args = vec![
        "build".to_string(),
        "--merge-install".to_string(),
        "--metas".to_string(),
    ];
    args.extend(plan.metas.iter().map(|m| m.display().to_string()));
    args.extend([
        "--event-handlers".to_string(),
        options.event_handlers().to_string(),
        "--cmake-args".to_string(),
        "--no-warn-unused-cli".to_string(),
        "-DBUILD_SHARED_LIBS=OFF".to_string(),
        "-DBUILD_TESTING=OFF".to_string(),
        format!("-DCMAKE_BUILD_TYPE={}", options.build_type),
        format!("-DCMAKE_VERBOSE_MAKEFILE={}", options.verbose_makefile()),
    ]);
    if let Some(toolchain) = &plan.toolchain {
        args.push(format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain.display()));
    }
    if !plan.filter.ignored().is_empty() {
        args.push("--packages-ignore".to_string());
        args.extend(plan.filter.ignored().iter().cloned());
    }
    args
}
