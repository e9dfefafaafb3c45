//! Node runtime for TypeScript and JavaScript programs

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::time::Instant;
use tracing::debug;

use super::{
    create_run_dir, release_run_dir, require_tool, run_captured, write_program, CommandSpec,
    ExecutionResult, RuntimeAdapter,
};
use crate::error::Result;
use crate::harness::script::{strip_type_annotations, TRANSPILE_ANNOTATIONS};

const INSTALL_HINT: &str = "Node.js runtime not found. Please install Node.js from https://nodejs.org/";

pub struct NodeRuntime {
    scratch_root: PathBuf,
}

impl NodeRuntime {
    pub fn new(scratch_root: PathBuf) -> Self {
        Self { scratch_root }
    }
}

/// Node cannot parse type annotations; strip whatever the harness left.
fn transpile(code: &str) -> String {
    if TRANSPILE_ANNOTATIONS.iter().any(|a| code.contains(a)) {
        debug!("Stripping leftover type annotations");
        strip_type_annotations(code, TRANSPILE_ANNOTATIONS)
    } else {
        code.to_string()
    }
}

#[async_trait]
impl RuntimeAdapter for NodeRuntime {
    fn name(&self) -> &'static str {
        "node"
    }

    fn check_availability(&self) -> Result<()> {
        require_tool("node", INSTALL_HINT)
    }

    async fn execute(&self, deadline: Instant, code: &str) -> Result<ExecutionResult> {
        let run_dir = create_run_dir(&self.scratch_root, self.name())?;
        write_program(run_dir.path(), "solution.js", &transpile(code)).await?;

        let spec = CommandSpec::new("node")
            .with_args(["solution.js"])
            .with_work_dir(run_dir.path());
        let captured = run_captured(&spec, deadline).await?;

        release_run_dir(run_dir);
        Ok(ExecutionResult::from_run(captured))
    }
}
