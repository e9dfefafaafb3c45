//! Execution coordinator
//!
//! Owns the scratch root, picks the runtime adapter for a language and runs
//! one program under a time limit.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::get_config;
use crate::error::{HarnessError, Result};
use crate::runner::{adapter_for, ExecutionResult};

/// Runs one generated program; implemented by [`Executor`]
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute_code(
        &self,
        language: &str,
        code: &str,
        time_limit_ms: u64,
    ) -> Result<ExecutionResult>;
}

pub struct Executor {
    /// Parent of every run directory; removed on `close` or drop
    scratch_root: TempDir,
}

impl Executor {
    /// Create the scratch root under `CODEQUEST_SCRATCH_DIR`, or the system
    /// temp dir when that is unset.
    pub fn new() -> Result<Self> {
        let parent = get_config()
            .scratch_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        Self::with_parent(&parent)
    }

    pub fn with_parent(parent: &Path) -> Result<Self> {
        let scratch_root = tempfile::Builder::new()
            .prefix("codequest-")
            .tempdir_in(parent)
            .map_err(|source| HarnessError::WorkspaceCreationFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        debug!("Scratch root at {}", scratch_root.path().display());

        Ok(Self { scratch_root })
    }

    pub fn scratch_root(&self) -> &Path {
        self.scratch_root.path()
    }

    /// Run `code` as a `language` program, giving it `time_limit_ms`.
    ///
    /// The returned duration covers the whole call, including runtime lookup
    /// and any build step.
    pub async fn execute_code(
        &self,
        language: &str,
        code: &str,
        time_limit_ms: u64,
    ) -> Result<ExecutionResult> {
        let started = Instant::now();

        let adapter = adapter_for(language, self.scratch_root())?;
        adapter.check_availability()?;

        let deadline = started + Duration::from_millis(time_limit_ms);
        let mut result = adapter.execute(deadline, code).await?;
        result.duration = started.elapsed();

        if result.timed_out {
            result.error = format!("execution timed out after {}ms", time_limit_ms);
        }

        info!(
            "{} run finished: success={}, exit_code={}, {:.2}ms",
            adapter.name(),
            result.success,
            result.exit_code,
            result.duration.as_secs_f64() * 1000.0
        );

        Ok(result)
    }

    /// Remove the scratch root and everything left in it
    pub fn close(self) {
        let path = self.scratch_root.path().to_path_buf();
        if let Err(e) = self.scratch_root.close() {
            warn!("Failed to remove scratch root {}: {}", path.display(), e);
        }
    }
}

#[async_trait]
impl CodeExecutor for Executor {
    async fn execute_code(
        &self,
        language: &str,
        code: &str,
        time_limit_ms: u64,
    ) -> Result<ExecutionResult> {
        Executor::execute_code(self, language, code, time_limit_ms).await
    }
}
