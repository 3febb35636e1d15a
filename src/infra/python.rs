//! python3 version probe
//!
//! The host install tree's site-packages path depends on the minor
//! version of the python3 that vcs and colcon run under, so that
//! interpreter is asked directly.

use std::process::Command;

use crate::error::BuildError;

/// Minor version of the python3 on PATH.
pub fn detect_python_minor() -> Result<u32, BuildError> {
    let output = Command::new("python3")
        .args(["-c", "import sys; print(sys.version_info.minor)"])
        .output()
        .map_err(|e| BuildError::PythonProbe {
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(BuildError::PythonProbe {
            error: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    parse_minor(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the probe output into a minor version number.
fn parse_minor(output: &str) -> Result<u32, BuildError> {
    output
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| BuildError::PythonProbe {
            error: format!("unexpected version output '{}': {e}", output.trim()),
        })
}
