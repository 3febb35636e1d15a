//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.


#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_names_are_lowercase(name in package_name()) {
            prop_assert!(name.chars().all(|c| !c.is_ascii_uppercase()));
        }

        #[test]
        fn test_install_paths_are_absolute(path in install_path()) {
            prop_assert!(path.is_absolute());
        }
    }
}
