//! Preflight tool checks
//!
//! The orchestrator shells out to vcs, colcon, and python3; a missing
//! tool should surface before any workspace is touched, with every
//! missing tool reported at once.

use std::path::PathBuf;

use crate::config::defaults;
use crate::error::BuildError;

/// Result of a single PATH lookup
#[derive(Debug, Clone)]
pub struct ToolCheck {
    /// Tool name
    pub name: String,
    /// Resolved path, if found
    pub path: Option<PathBuf>,
}

impl ToolCheck {
    /// Whether the tool was found
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Look up every required tool on PATH.
pub fn check_tools() -> Vec<ToolCheck> {
    defaults::REQUIRED_TOOLS
        .iter()
        .map(|name| ToolCheck {
            name: (*name).to_string(),
            path: which::which(name).ok(),
        })
        .collect()
}

/// Fail with every missing tool listed when PATH is incomplete.
pub fn require_tools() -> Result<(), BuildError> {
    let missing: Vec<String> = check_tools()
        .into_iter()
        .filter(|check| !check.found())
        .map(|check| check.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BuildError::MissingTools { tools: missing })
    }
}
