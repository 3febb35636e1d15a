//! colcon build invocation
//!
//! One blocking `colcon` call per workspace. The workspace root is set
//! as the child's working directory, so the orchestrator's own working
//! directory never changes; bridge variables are set on the child
//! process only.

use std::path::Path;
use std::process::Command;

use crate::core::orchestrator::BuildRunner;
use crate::error::BuildError;

/// [`BuildRunner`] backed by `colcon build`
#[derive(Debug, Clone, Copy, Default)]
pub struct ColconRunner;

impl BuildRunner for ColconRunner {
    fn build(
        &self,
        workspace_root: &Path,
        args: &[String],
        env: &[(String, String)],
    ) -> Result<(), BuildError> {
        let workspace = workspace_root.display().to_string();

        let mut cmd = Command::new("colcon");
        cmd.args(args).current_dir(workspace_root);
        for (key, value) in env {
            cmd.env(key, value);
        }

        tracing::debug!(%workspace, ?args, "running colcon");
        let status = cmd.status().map_err(|e| BuildError::Spawn {
            workspace: workspace.clone(),
            error: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(BuildError::Failed {
                workspace,
                status: status.to_string(),
            })
        }
    }
}
