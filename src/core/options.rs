//! Build options
//!
//! Options fixed for the duration of one invocation, and their mapping
//! onto colcon and CMake flags.

use std::path::PathBuf;

/// CMake build type for both workspaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    /// Unoptimized build with debug info
    Debug,
    /// Optimized build
    #[default]
    Release,
}

impl BuildType {
    /// Value passed as `-DCMAKE_BUILD_TYPE`
    pub fn cmake_value(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cmake_value())
    }
}

/// Options shared by both workspace builds
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Build type for both workspaces
    pub build_type: BuildType,
    /// Raise colcon console verbosity and generate verbose makefiles
    pub verbose: bool,
    /// Delete the output directory before building
    pub clean: bool,
    /// Root under which both workspaces and the CMake config are created
    pub output_dir: PathBuf,
}

impl BuildOptions {
    /// colcon `--event-handlers` value
    pub fn event_handlers(&self) -> &'static str {
        if self.verbose {
            "console_cohesion+"
        } else {
            "console_stderr-"
        }
    }

    /// Value passed as `-DCMAKE_VERBOSE_MAKEFILE`
    pub fn verbose_makefile(&self) -> &'static str {
        if self.verbose {
            "ON"
        } else {
            "OFF"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(verbose: bool) -> BuildOptions {
        BuildOptions {
            build_type: BuildType::Release,
            verbose,
            clean: true,
            output_dir: PathBuf::from("build"),
        }
    }

    #[test]
    fn test_build_type_maps_to_cmake_value() {
        assert_eq!(BuildType::Debug.cmake_value(), "Debug");
        assert_eq!(BuildType::Release.cmake_value(), "Release");
    }

    #[test]
    fn test_default_build_type_is_release() {
        assert_eq!(BuildType::default(), BuildType::Release);
    }

    #[test]
    fn test_verbose_raises_event_handler_verbosity() {
        assert_eq!(options(true).event_handlers(), "console_cohesion+");
        assert_eq!(options(false).event_handlers(), "console_stderr-");
    }

    #[test]
    fn test_verbose_enables_verbose_makefiles() {
        assert_eq!(options(true).verbose_makefile(), "ON");
        assert_eq!(options(false).verbose_makefile(), "OFF");
    }
}
