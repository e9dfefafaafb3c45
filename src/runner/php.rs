//! PHP runtime: `php solution.php`

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::time::Instant;

use super::{
    create_run_dir, release_run_dir, require_tool, run_captured, write_program, CommandSpec,
    ExecutionResult, RuntimeAdapter,
};
use crate::error::Result;

const INSTALL_HINT: &str =
    "PHP runtime not found. Please install PHP from https://www.php.net/downloads";

pub struct PhpRuntime {
    scratch_root: PathBuf,
}

impl PhpRuntime {
    pub fn new(scratch_root: PathBuf) -> Self {
        Self { scratch_root }
    }
}

#[async_trait]
impl RuntimeAdapter for PhpRuntime {
    fn name(&self) -> &'static str {
        "php"
    }

    fn check_availability(&self) -> Result<()> {
        require_tool("php", INSTALL_HINT)
    }

    async fn execute(&self, deadline: Instant, code: &str) -> Result<ExecutionResult> {
        let run_dir = create_run_dir(&self.scratch_root, self.name())?;
        write_program(run_dir.path(), "solution.php", code).await?;

        let spec = CommandSpec::new("php")
            .with_args(["solution.php"])
            .with_work_dir(run_dir.path());
        let captured = run_captured(&spec, deadline).await?;

        release_run_dir(run_dir);
        Ok(ExecutionResult::from_run(captured))
    }
}
