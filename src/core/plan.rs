//! Build plan resolution
//!
//! Validates and freezes everything a run needs before any external tool
//! is invoked: workspace layout, metadata/toolchain resolution, extra
//! source classification, the package filter, and the environment
//! snapshot the bridge derives from. A missing base metadata file or
//! extra source aborts here, fail-fast, before anything is built.
//!
//! Callers supply absolute directories; the plan never consults the
//! process working directory itself.

use std::path::PathBuf;

use crate::config::defaults;
use crate::core::filter::PackageFilter;
use crate::core::ingest::ExtraSource;
use crate::core::metadata::{resolve_metadata, resolve_toolchain};
use crate::core::options::BuildOptions;
use crate::core::workspace::Workspace;
use crate::error::UrosBuildError;

/// Unresolved inputs for one invocation, flags and file defaults already
/// merged by the caller
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Directory holding the baseline `.repos`/`.meta`/`.cmake` files
    pub project_dir: PathBuf,
    /// Build options for both workspaces
    pub options: BuildOptions,
    /// Replacement for the baseline target repos manifest
    pub mcu_packages: Option<PathBuf>,
    /// Metadata override, merged after the baseline
    pub meta_override: Option<PathBuf>,
    /// Toolchain override
    pub toolchain_override: Option<PathBuf>,
    /// Extra package sources, in supplied order
    pub extra_sources: Vec<PathBuf>,
}

/// Everything a run needs, validated
#[derive(Debug, Clone)]
pub struct BuildPlan {
    /// Build options for both workspaces
    pub options: BuildOptions,
    /// Host workspace
    pub dev: Workspace,
    /// Target workspace
    pub mcu: Workspace,
    /// colcon metadata files, base first
    pub metas: Vec<PathBuf>,
    /// CMake toolchain file, if cross-compiling
    pub toolchain: Option<PathBuf>,
    /// Extra sources merged into the target source tree
    pub extra_sources: Vec<ExtraSource>,
    /// Deny-list applied to the target build
    pub filter: PackageFilter,
    /// Minor version of the python3 colcon runs under
    pub python_minor: u32,
    /// `PYTHONPATH` observed before the run
    pub prior_pythonpath: Option<String>,
}

impl BuildPlan {
    /// Resolve a request into a validated plan.
    pub fn resolve(
        request: PlanRequest,
        python_minor: u32,
        prior_pythonpath: Option<String>,
    ) -> Result<Self, UrosBuildError> {
        let PlanRequest {
            project_dir,
            options,
            mcu_packages,
            meta_override,
            toolchain_override,
            extra_sources,
        } = request;

        let dev_manifest = project_dir.join(defaults::DEV_PACKAGES_REPOS);
        let mcu_manifest =
            mcu_packages.unwrap_or_else(|| project_dir.join(defaults::MCU_PACKAGES_REPOS));

        let metas = resolve_metadata(
            &project_dir.join(defaults::COLCON_META),
            meta_override.as_deref(),
        )?;
        let toolchain = resolve_toolchain(
            Some(&project_dir.join(defaults::TOOLCHAIN_CMAKE)),
            toolchain_override.as_deref(),
        )?;

        let extra_sources = extra_sources
            .iter()
            .map(|path| ExtraSource::classify(path))
            .collect::<Result<Vec<_>, _>>()?;

        let dev = Workspace::dev(&options.output_dir, dev_manifest);
        let mcu = Workspace::mcu(&options.output_dir, mcu_manifest);

        Ok(Self {
            options,
            dev,
            mcu,
            metas,
            toolchain,
            extra_sources,
            filter: PackageFilter::default(),
            python_minor,
            prior_pythonpath,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::BuildType;
    use crate::error::{ConfigError, SourceError};
    use std::path::Path;
    use tempfile::TempDir;

    fn project_with_meta() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("colcon.meta"), "{}").unwrap();
        dir
    }

    fn request(project: &Path) -> PlanRequest {
        PlanRequest {
            project_dir: project.to_path_buf(),
            options: BuildOptions {
                build_type: BuildType::Release,
                verbose: false,
                clean: true,
                output_dir: project.join("build"),
            },
            mcu_packages: None,
            meta_override: None,
            toolchain_override: None,
            extra_sources: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_lays_out_both_workspaces() {
        let project = project_with_meta();
        let plan = BuildPlan::resolve(request(project.path()), 11, None).unwrap();

        assert_eq!(plan.dev.root, project.path().join("build/dev_ws"));
        assert_eq!(plan.mcu.root, project.path().join("build/mcu_ws"));
        assert_eq!(
            plan.dev.source_manifest,
            project.path().join("dev_packages.repos")
        );
        assert_eq!(
            plan.mcu.source_manifest,
            project.path().join("mcu_packages.repos")
        );
    }

    #[test]
    fn test_resolve_uses_baseline_meta_only() {
        let project = project_with_meta();
        let plan = BuildPlan::resolve(request(project.path()), 11, None).unwrap();

        assert_eq!(plan.metas, vec![project.path().join("colcon.meta")]);
    }

    #[test]
    fn test_resolve_fails_without_base_meta() {
        let project = TempDir::new().unwrap();
        let err = BuildPlan::resolve(request(project.path()), 11, None).unwrap_err();

        assert!(matches!(
            err,
            UrosBuildError::Config(ConfigError::MetadataNotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_fails_on_missing_extra_source() {
        let project = project_with_meta();
        let mut req = request(project.path());
        req.extra_sources.push(project.path().join("nope"));

        let err = BuildPlan::resolve(req, 11, None).unwrap_err();
        assert!(matches!(
            err,
            UrosBuildError::Source(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_picks_up_toolchain_when_present() {
        let project = project_with_meta();
        std::fs::write(project.path().join("toolchain.cmake"), "").unwrap();

        let plan = BuildPlan::resolve(request(project.path()), 11, None).unwrap();
        assert_eq!(plan.toolchain, Some(project.path().join("toolchain.cmake")));
    }

    #[test]
    fn test_resolve_without_toolchain_is_native() {
        let project = project_with_meta();
        let plan = BuildPlan::resolve(request(project.path()), 11, None).unwrap();
        assert_eq!(plan.toolchain, None);
    }

    #[test]
    fn test_mcu_manifest_override_replaces_baseline() {
        let project = project_with_meta();
        let mut req = request(project.path());
        req.mcu_packages = Some(project.path().join("custom.repos"));

        let plan = BuildPlan::resolve(req, 11, None).unwrap();
        assert_eq!(plan.mcu.source_manifest, project.path().join("custom.repos"));
        // The host manifest is never replaced.
        assert_eq!(
            plan.dev.source_manifest,
            project.path().join("dev_packages.repos")
        );
    }

    #[test]
    fn test_extra_sources_keep_supplied_order() {
        let project = project_with_meta();
        std::fs::create_dir(project.path().join("trees")).unwrap();
        std::fs::write(project.path().join("extra.repos"), "").unwrap();

        let mut req = request(project.path());
        req.extra_sources = vec![
            project.path().join("extra.repos"),
            project.path().join("trees"),
        ];

        let plan = BuildPlan::resolve(req, 11, None).unwrap();
        assert_eq!(
            plan.extra_sources,
            vec![
                ExtraSource::Manifest(project.path().join("extra.repos")),
                ExtraSource::Tree(project.path().join("trees")),
            ]
        );
    }
}
