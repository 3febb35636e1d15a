//! Default names and values for the build layout

/// Default output directory, relative to the project directory
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Host (toolchain) workspace directory under the output directory
pub const DEV_WS_DIR: &str = "dev_ws";

/// Target (cross-compiled) workspace directory under the output directory
pub const MCU_WS_DIR: &str = "mcu_ws";

/// Source tree directory inside a workspace
pub const SRC_DIR: &str = "src";

/// Install tree produced by colcon inside a workspace
pub const INSTALL_DIR: &str = "install";

/// Subdirectory of the target source tree that holds extra packages,
/// isolated from the base-manifest-imported ones
pub const EXTRA_PACKAGES_DIR: &str = "extra_packages";

/// Baseline repos manifest for the host workspace
pub const DEV_PACKAGES_REPOS: &str = "dev_packages.repos";

/// Baseline repos manifest for the target workspace
pub const MCU_PACKAGES_REPOS: &str = "mcu_packages.repos";

/// Baseline colcon metadata file for the target workspace
pub const COLCON_META: &str = "colcon.meta";

/// Baseline CMake toolchain file for the target workspace
pub const TOOLCHAIN_CMAKE: &str = "toolchain.cmake";

/// Optional per-project configuration file
pub const PROJECT_CONFIG: &str = "urosbuild.toml";

/// CMake config emitted for downstream consumers
pub const CMAKE_CONFIG_FILE: &str = "micro_ros_cmakeConfig.cmake";

/// Ament search path variable, pointed at the host install tree
pub const AMENT_PREFIX_PATH: &str = "AMENT_PREFIX_PATH";

/// CMake search path variable, pointed at the host install tree
pub const CMAKE_PREFIX_PATH: &str = "CMAKE_PREFIX_PATH";

/// Python module path variable, extended with the host site-packages
pub const PYTHONPATH: &str = "PYTHONPATH";

/// ROS middleware selector variable
pub const RMW_IMPLEMENTATION: &str = "RMW_IMPLEMENTATION";

/// Middleware implementation the target build links against
pub const RMW_MICROXRCEDDS: &str = "rmw_microxrcedds";

/// Tools that must be on PATH before a build can start
pub const REQUIRED_TOOLS: &[&str] = &["vcs", "colcon", "python3"];
