//! Python runtime
//!
//! Programs run as written; there is no Python harness.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::time::Instant;

use super::{
    create_run_dir, find_tool, release_run_dir, run_captured, write_program, CommandSpec,
    ExecutionResult, RuntimeAdapter,
};
use crate::error::{HarnessError, Result};

const INSTALL_HINT: &str =
    "Python runtime not found. Please install Python from https://python.org/downloads/";

/// Interpreter names in order of preference
const INTERPRETERS: [&str; 2] = ["python3", "python"];

pub struct PythonRuntime {
    scratch_root: PathBuf,
}

impl PythonRuntime {
    pub fn new(scratch_root: PathBuf) -> Self {
        Self { scratch_root }
    }

    fn resolve_interpreter() -> Result<&'static str> {
        INTERPRETERS
            .into_iter()
            .find(|name| find_tool(name).is_some())
            .ok_or_else(|| HarnessError::RuntimeNotFound {
                tool: INTERPRETERS[0].to_string(),
                message: INSTALL_HINT.to_string(),
            })
    }
}

#[async_trait]
impl RuntimeAdapter for PythonRuntime {
    fn name(&self) -> &'static str {
        "python"
    }

    fn check_availability(&self) -> Result<()> {
        Self::resolve_interpreter().map(|_| ())
    }

    async fn execute(&self, deadline: Instant, code: &str) -> Result<ExecutionResult> {
        // Resolved again here; PATH may differ from the availability check
        let interpreter = Self::resolve_interpreter()?;

        let run_dir = create_run_dir(&self.scratch_root, self.name())?;
        write_program(run_dir.path(), "solution.py", code).await?;

        let spec = CommandSpec::new(interpreter)
            .with_args(["solution.py"])
            .with_work_dir(run_dir.path());
        let captured = run_captured(&spec, deadline).await?;

        release_run_dir(run_dir);
        Ok(ExecutionResult::from_run(captured))
    }
}
