//! Common test utilities and helpers
//!
//! Shared setup for integration tests: a tempdir-backed project and
//! recording fakes for the import/build collaborators.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use urosbuild::core::orchestrator::{BuildRunner, Importer};
use urosbuild::error::{BuildError, ImportError};

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project with a baseline colcon.meta
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        project.create_file("colcon.meta", "{}\n");
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// One recorded collaborator invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// An importer call
    Import { manifest: PathBuf, dest: PathBuf },
    /// A build-runner call
    Build {
        workspace: PathBuf,
        args: Vec<String>,
        env: Vec<(String, String)>,
    },
}

/// Shared, ordered record of collaborator invocations
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// Snapshot of the recorded calls, in invocation order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded build calls only
    pub fn builds(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Build { .. }))
            .collect()
    }
}

/// Importer fake that records calls and can fail on one manifest
pub struct FakeImporter {
    pub log: CallLog,
    pub fail_on: Option<PathBuf>,
}

impl FakeImporter {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail_on: None }
    }

    pub fn failing_on(log: CallLog, manifest: PathBuf) -> Self {
        Self {
            log,
            fail_on: Some(manifest),
        }
    }
}

impl Importer for FakeImporter {
    fn import(&self, manifest: &Path, dest: &Path) -> Result<(), ImportError> {
        self.log.record(Call::Import {
            manifest: manifest.to_path_buf(),
            dest: dest.to_path_buf(),
        });
        if self.fail_on.as_deref() == Some(manifest) {
            return Err(ImportError::Failed {
                manifest: manifest.to_path_buf(),
                dest: dest.to_path_buf(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Build-runner fake that records calls and can fail on one workspace
pub struct FakeRunner {
    pub log: CallLog,
    pub fail_on: Option<PathBuf>,
}

impl FakeRunner {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail_on: None }
    }

    pub fn failing_on(log: CallLog, workspace: PathBuf) -> Self {
        Self {
            log,
            fail_on: Some(workspace),
        }
    }
}

impl BuildRunner for FakeRunner {
    fn build(
        &self,
        workspace_root: &Path,
        args: &[String],
        env: &[(String, String)],
    ) -> Result<(), BuildError> {
        self.log.record(Call::Build {
            workspace: workspace_root.to_path_buf(),
            args: args.to_vec(),
            env: env.to_vec(),
        });
        if self.fail_on.as_deref() == Some(workspace_root) {
            return Err(BuildError::Failed {
                workspace: workspace_root.display().to_string(),
                status: "exit status: 2".to_string(),
            });
        }
        Ok(())
    }
}
