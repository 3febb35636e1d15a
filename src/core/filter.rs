//! Target build package filter
//!
//! Packages excluded from the mcu_ws build. These either need host-only
//! tracing/introspection facilities (lttng, tracetools), duplicate
//! typesupport the Micro XRCE-DDS middleware provides natively, or only
//! exist to run tests. The list is fixed per release of the orchestrator
//! and never applied to the host workspace.

/// Packages ignored when building the target workspace
pub const IGNORED_PACKAGES: &[&str] = &[
    "lttngpy",
    "rcl_lifecycle",
    "rcl_logging_noop",
    "rcl_logging_spdlog",
    "rcl_yaml_param_parser",
    "rclc_examples",
    "rclc_lifecycle",
    "ros2trace",
    "rosidl_cli",
    "rosidl_generator_cpp",
    "rosidl_runtime_cpp",
    "rosidl_typesupport_cpp",
    "rosidl_typesupport_introspection_c",
    "rosidl_typesupport_introspection_cpp",
    "rosidl_typesupport_introspection_tests",
    "rosidl_typesupport_microxrcedds_cpp",
    "rosidl_typesupport_microxrcedds_c_tests",
    "rosidl_typesupport_microxrcedds_test_msg",
    "rosidl_typesupport_tests",
    "sensor_msgs_py",
    "test_msgs",
    "test_rmw_implementation",
    "test_ros2trace",
    "test_tracetools",
    "test_tracetools_launch",
    "tracetools_launch",
    "tracetools_read",
    "tracetools_test",
    "tracetools_trace",
];

/// Deny-list applied to the target workspace build
///
/// Defaults to [`IGNORED_PACKAGES`]; the set is orchestrator
/// configuration, so replacing it is a code-level decision, not a CLI
/// surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilter {
    ignored: Vec<String>,
}

impl Default for PackageFilter {
    fn default() -> Self {
        Self {
            ignored: IGNORED_PACKAGES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl PackageFilter {
    /// Filter with a custom ignore set, in the given order
    pub fn with_ignored(ignored: Vec<String>) -> Self {
        Self { ignored }
    }

    /// Ignored package names, in deny-list order
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Whether `package` is excluded from the target build
    pub fn is_ignored(&self, package: &str) -> bool {
        self.ignored.iter().any(|p| p == package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Packages the host workspace build requires; the deny-list must
    /// never touch any of these.
    const DEV_WS_PACKAGES: &[&str] = &[
        "ament_cmake",
        "ament_lint",
        "ament_package",
        "rosidl_adapter",
        "rosidl_generator_c",
        "rosidl_parser",
        "rosidl_typesupport_microxrcedds_c",
    ];

    #[test]
    fn test_default_filter_matches_release_list() {
        let filter = PackageFilter::default();
        assert_eq!(filter.ignored().len(), IGNORED_PACKAGES.len());
        assert_eq!(filter.ignored()[0], "lttngpy");
        assert!(filter.is_ignored("tracetools_trace"));
        assert!(!filter.is_ignored("rclc"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = PackageFilter::default();
        let names: Vec<&str> = filter.ignored().iter().map(String::as_str).collect();
        assert_eq!(names, IGNORED_PACKAGES);
    }

    #[test]
    fn test_filter_disjoint_from_host_packages() {
        let filter = PackageFilter::default();
        for package in DEV_WS_PACKAGES {
            assert!(
                !filter.is_ignored(package),
                "host package '{package}' must not be filtered"
            );
        }
    }

    #[test]
    fn test_custom_ignore_set() {
        let filter = PackageFilter::with_ignored(vec!["demo_nodes".to_string()]);
        assert!(filter.is_ignored("demo_nodes"));
        assert!(!filter.is_ignored("lttngpy"));
    }
}
