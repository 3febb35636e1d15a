//! Downstream CMake config generation
//!
//! Writes `micro_ros_cmakeConfig.cmake` at the output-directory root so a
//! consuming CMake build can locate both install trees without
//! re-deriving them. The orchestrator never reads this file back.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::bridge::site_packages;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Render the config contents.
pub fn render(dev_install: &Path, mcu_install: &Path, python_minor: u32) -> String {
    let dev_site = site_packages(dev_install, python_minor);
    let mcu_site = site_packages(mcu_install, python_minor);

    format!(
        r#"list(APPEND CMAKE_PREFIX_PATH "{}" "{}")
list(APPEND PYTHON_PREFIX_PATH "{}" "{}")

list(JOIN CMAKE_PREFIX_PATH ":" AMENT_PREFIX_PATH)
list(JOIN PYTHON_PREFIX_PATH ":" PYTHONPATH)

set(ENV{{"AMENT_PREFIX_PATH"}} "${{AMENT_PREFIX_PATH}}")
set(ENV{{"PYTHONPATH"}} "${{PYTHONPATH}}")
"#,
        dev_install.display(),
        mcu_install.display(),
        dev_site.display(),
        mcu_site.display(),
    )
}

/// Write the config under `output_dir`, overwriting any previous run's
/// file, and return its path.
pub fn emit(
    output_dir: &Path,
    dev_install: &Path,
    mcu_install: &Path,
    python_minor: u32,
) -> Result<PathBuf, FilesystemError> {
    let path = output_dir.join(defaults::CMAKE_CONFIG_FILE);
    let contents = render(dev_install, mcu_install, python_minor);
    filesystem::write_file(&path, &contents)?;
    Ok(path)
}
