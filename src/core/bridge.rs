//! Cross-workspace environment bridge
//!
//! The target workspace build resolves host-built tooling through
//! environment variables derived from the host install tree. The three
//! variables follow different policies:
//!
//! - `AMENT_PREFIX_PATH` / `CMAKE_PREFIX_PATH` replace any prior value,
//!   so host-built tooling is always resolved first;
//! - `PYTHONPATH` appends the host site-packages to any prior value,
//!   since other tooling may depend on entries already present;
//! - `RMW_IMPLEMENTATION` is set unconditionally to the Micro XRCE-DDS
//!   implementation.
//!
//! The bridge is derived exactly once, after the host build succeeds and
//! before the target build starts, and is applied to the target colcon
//! invocation only; the orchestrator's own environment is never touched.

use std::path::{Path, PathBuf};

use crate::config::defaults;

/// Environment variables injected into the target workspace build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentBridge {
    /// Ament search path (host install tree)
    pub ament_prefix_path: String,
    /// CMake search path (host install tree)
    pub cmake_prefix_path: String,
    /// Python module path, prior entries preserved in front
    pub pythonpath: String,
    /// Middleware implementation selector
    pub rmw_implementation: String,
}

impl EnvironmentBridge {
    /// Derive the bridge from the host install tree.
    ///
    /// `prior_pythonpath` is the `PYTHONPATH` value observed before the
    /// run; `python_minor` is the minor version of the python3 that
    /// colcon runs under.
    pub fn derive(
        host_install_dir: &Path,
        python_minor: u32,
        prior_pythonpath: Option<&str>,
    ) -> Self {
        let install = host_install_dir.display().to_string();
        let site_packages = site_packages(host_install_dir, python_minor)
            .display()
            .to_string();

        let pythonpath = match prior_pythonpath {
            Some(prior) if !prior.is_empty() => format!("{prior}:{site_packages}"),
            _ => site_packages,
        };

        Self {
            ament_prefix_path: install.clone(),
            cmake_prefix_path: install,
            pythonpath,
            rmw_implementation: defaults::RMW_MICROXRCEDDS.to_string(),
        }
    }

    /// Variable name/value pairs, ready for child-process environment
    pub fn vars(&self) -> Vec<(String, String)> {
        vec![
            (
                defaults::AMENT_PREFIX_PATH.to_string(),
                self.ament_prefix_path.clone(),
            ),
            (
                defaults::CMAKE_PREFIX_PATH.to_string(),
                self.cmake_prefix_path.clone(),
            ),
            (defaults::PYTHONPATH.to_string(), self.pythonpath.clone()),
            (
                defaults::RMW_IMPLEMENTATION.to_string(),
                self.rmw_implementation.clone(),
            ),
        ]
    }
}

/// Site-packages directory of an install tree for a python3 minor version
pub fn site_packages(install_dir: &Path, python_minor: u32) -> PathBuf {
    install_dir
        .join("lib")
        .join(format!("python3.{python_minor}"))
        .join("site-packages")
}
