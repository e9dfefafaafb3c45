//! Go runtime: `go mod init` then `go run`

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::{
    create_run_dir, release_run_dir, require_tool, run_captured, write_program, CommandSpec,
    ExecutionResult, RunStatus, RuntimeAdapter,
};
use crate::error::{HarnessError, Result};

const INSTALL_HINT: &str = "Go runtime not found. Please install Go from https://golang.org/dl/";
const MODULE_NAME: &str = "solution";

pub struct GoRuntime {
    scratch_root: PathBuf,
    /// The `go` executable; a name resolved on `PATH` or a path
    program: String,
}

impl GoRuntime {
    pub fn new(scratch_root: PathBuf) -> Self {
        Self {
            scratch_root,
            program: "go".to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_program(scratch_root: PathBuf, program: impl Into<String>) -> Self {
        Self {
            scratch_root,
            program: program.into(),
        }
    }
}

#[async_trait]
impl RuntimeAdapter for GoRuntime {
    fn name(&self) -> &'static str {
        "go"
    }

    fn check_availability(&self) -> Result<()> {
        require_tool(&self.program, INSTALL_HINT)
    }

    async fn execute(&self, deadline: Instant, code: &str) -> Result<ExecutionResult> {
        let run_dir = create_run_dir(&self.scratch_root, self.name())?;
        write_program(run_dir.path(), "main.go", code).await?;

        // `go run` needs a module around main.go
        let init = CommandSpec::new(self.program.as_str())
            .with_args(["mod", "init", MODULE_NAME])
            .with_work_dir(run_dir.path());
        let init_run = run_captured(&init, deadline)
            .await
            .map_err(|e| build_setup_failed(e.to_string()))?;
        match &init_run.status {
            RunStatus::Exited(status) if status.success() => {}
            RunStatus::Exited(status) => {
                return Err(build_setup_failed(format!(
                    "{}: {}",
                    status,
                    init_run.output.trim()
                )));
            }
            RunStatus::TimedOut => {
                warn!("Deadline passed during go mod init");
                release_run_dir(run_dir);
                return Ok(ExecutionResult::from_run(init_run));
            }
        }
        debug!("Initialized Go module in {}", run_dir.path().display());

        let run = CommandSpec::new(self.program.as_str())
            .with_args(["run", "main.go"])
            .with_work_dir(run_dir.path());
        let captured = run_captured(&run, deadline).await?;

        release_run_dir(run_dir);
        Ok(ExecutionResult::from_run(captured))
    }
}

fn build_setup_failed(message: String) -> HarnessError {
    HarnessError::BuildSetupFailed {
        language: "go".to_string(),
        message,
    }
}
