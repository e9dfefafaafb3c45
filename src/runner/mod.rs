//! Runner module - Runtime adapters
//!
//! One adapter per external runtime. Every adapter:
//! - checks that its runtime is on `PATH`
//! - writes the generated program into a fresh run directory
//! - runs the runtime there under the caller's deadline
//! - returns combined stdout/stderr and a classified exit status
//!
//! The runner module does NOT:
//! - Generate programs (that's the harness's job)
//! - Measure durations or pick time limits (that's the executor's job)

pub mod go;
pub mod node;
pub mod php;
pub mod python;

use async_trait::async_trait;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::process::Command;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::{HarnessError, Result};
use crate::languages::Language;

pub use go::GoRuntime;
pub use node::NodeRuntime;
pub use php::PhpRuntime;
pub use python::PythonRuntime;

/// Outcome of one execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Program exited with status 0
    pub success: bool,
    /// Combined stdout and stderr
    pub output: String,
    /// Exit error text; empty on success
    pub error: String,
    /// Wall-clock time of the whole call (set by the executor)
    pub duration: Duration,
    /// Exit code (-1 when killed by a signal or timed out)
    pub exit_code: i32,
    /// The deadline elapsed and the process was killed
    pub timed_out: bool,
}

impl ExecutionResult {
    fn from_run(run: CapturedRun) -> Self {
        match run.status {
            RunStatus::Exited(status) if status.success() => Self {
                success: true,
                output: run.output,
                error: String::new(),
                duration: Duration::ZERO,
                exit_code: 0,
                timed_out: false,
            },
            RunStatus::Exited(status) => Self {
                success: false,
                output: run.output,
                error: status.to_string(),
                duration: Duration::ZERO,
                exit_code: status.code().unwrap_or(-1),
                timed_out: false,
            },
            RunStatus::TimedOut => Self {
                success: false,
                output: run.output,
                error: "deadline exceeded".to_string(),
                duration: Duration::ZERO,
                exit_code: -1,
                timed_out: true,
            },
        }
    }
}

/// Contract every runtime adapter fulfils
#[async_trait]
pub trait RuntimeAdapter: Send + Sync {
    /// Short name used for run directories and logs
    fn name(&self) -> &'static str;

    /// Fails with `RuntimeNotFound` when the runtime is not installed
    fn check_availability(&self) -> Result<()>;

    /// Run `code`, killing the runtime if `deadline` passes first
    async fn execute(&self, deadline: Instant, code: &str) -> Result<ExecutionResult>;
}

/// Pick the adapter for a catalog language id
pub fn adapter_for(language: &str, scratch_root: &Path) -> Result<Box<dyn RuntimeAdapter>> {
    let root = scratch_root.to_path_buf();
    match Language::from_id(language) {
        Some(Language::Go) => Ok(Box::new(GoRuntime::new(root))),
        Some(Language::TypeScript) | Some(Language::JavaScript) => {
            Ok(Box::new(NodeRuntime::new(root)))
        }
        Some(Language::Python) => Ok(Box::new(PythonRuntime::new(root))),
        Some(Language::Php) => Ok(Box::new(PhpRuntime::new(root))),
        None => Err(HarnessError::UnsupportedLanguage(language.to_string())),
    }
}

/// Resolve `tool` on `PATH`
pub fn find_tool(tool: &str) -> Option<PathBuf> {
    which::which(tool).ok()
}

pub(crate) fn require_tool(tool: &str, install_hint: &str) -> Result<()> {
    match find_tool(tool) {
        Some(path) => {
            debug!("Found {} at {}", tool, path.display());
            Ok(())
        }
        None => Err(HarnessError::RuntimeNotFound {
            tool: tool.to_string(),
            message: install_hint.to_string(),
        }),
    }
}

/// Global counter for run directory names
static RUN_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a uniquely named run directory under the scratch root.
///
/// The directory is removed when the returned guard is dropped, so every
/// exit path of an execution cleans up after itself.
pub(crate) fn create_run_dir(scratch_root: &Path, runtime: &str) -> Result<TempDir> {
    let run_id = RUN_COUNTER.fetch_add(1, Ordering::Relaxed);
    tempfile::Builder::new()
        .prefix(&format!("{}-{}-", runtime, run_id))
        .tempdir_in(scratch_root)
        .map_err(|source| HarnessError::WorkspaceCreationFailed {
            path: scratch_root.to_path_buf(),
            source,
        })
}

/// Remove a run directory, logging instead of failing
pub(crate) fn release_run_dir(run_dir: TempDir) {
    let path = run_dir.path().to_path_buf();
    if let Err(e) = run_dir.close() {
        warn!("Failed to remove run directory {}: {}", path.display(), e);
    }
}

pub(crate) async fn write_program(run_dir: &Path, file_name: &str, code: &str) -> Result<PathBuf> {
    let path = run_dir.join(file_name);
    tokio::fs::write(&path, code).await?;
    Ok(path)
}

/// Command specification for one runtime invocation
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Program path or name
    pub program: String,
    /// Arguments to the program
    pub args: Vec<String>,
    /// Working directory
    pub work_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            work_dir: None,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(|a| a.into()).collect();
        self
    }

    pub fn with_work_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.work_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

/// Raw status of a finished invocation
#[derive(Debug)]
pub(crate) enum RunStatus {
    Exited(ExitStatus),
    TimedOut,
}

#[derive(Debug)]
pub(crate) struct CapturedRun {
    pub status: RunStatus,
    /// stdout and stderr, interleaved as written
    pub output: String,
}

/// Run a command to completion or until `deadline`.
///
/// stdout and stderr share one anonymous file so the captured text keeps the
/// order the program wrote it in. On timeout the whole process group is
/// killed, which also takes down children such as the binary `go run` builds.
pub(crate) async fn run_captured(spec: &CommandSpec, deadline: Instant) -> Result<CapturedRun> {
    debug!("Running {} {:?}", spec.program, spec.args);

    let sink = match &spec.work_dir {
        Some(dir) => tempfile::tempfile_in(dir)?,
        None => tempfile::tempfile()?,
    };

    let mut std_cmd = std::process::Command::new(&spec.program);
    std_cmd
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(sink.try_clone()?))
        .stderr(Stdio::from(sink.try_clone()?));
    if let Some(dir) = &spec.work_dir {
        std_cmd.current_dir(dir);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        std_cmd.process_group(0);
    }

    let mut cmd = Command::from(std_cmd);
    cmd.kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| HarnessError::Spawn {
        program: spec.program.clone(),
        source,
    })?;

    let status = match tokio::time::timeout_at(deadline, child.wait()).await {
        Ok(status) => RunStatus::Exited(status?),
        Err(_) => {
            warn!("{} exceeded its deadline, killing it", spec.program);
            kill_process_group(child.id());
            if let Err(e) = child.kill().await {
                debug!("Kill after timeout failed: {}", e);
            }
            RunStatus::TimedOut
        }
    };

    let mut file = tokio::fs::File::from_std(sink);
    file.seek(SeekFrom::Start(0)).await?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).await?;

    Ok(CapturedRun {
        status,
        output: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    if let Some(pid) = pid {
        if let Err(e) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            debug!("killpg({}) failed: {}", pid, e);
        }
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(30)
    }

    #[test]
    fn test_adapter_registry() {
        let root = Path::new("/tmp");
        assert_eq!(adapter_for("go", root).unwrap().name(), "go");
        assert_eq!(adapter_for("typescript", root).unwrap().name(), "node");
        assert_eq!(adapter_for("javascript", root).unwrap().name(), "node");
        assert_eq!(adapter_for("python", root).unwrap().name(), "python");
        assert_eq!(adapter_for("php", root).unwrap().name(), "php");

        match adapter_for("cobol", root) {
            Err(HarnessError::UnsupportedLanguage(lang)) => assert_eq!(lang, "cobol"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other.map(|a| a.name())),
        }
    }

    #[test]
    fn test_missing_tool_is_runtime_not_found() {
        let err = require_tool("codequest-no-such-runtime", "install it from example.invalid").unwrap_err();
        match err {
            HarnessError::RuntimeNotFound { tool, message } => {
                assert_eq!(tool, "codequest-no-such-runtime");
                assert!(message.contains("example.invalid"));
            }
            other => panic!("expected RuntimeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_run_dirs_are_unique_and_removed() {
        let root = tempfile::tempdir().unwrap();
        let a = create_run_dir(root.path(), "node").unwrap();
        let b = create_run_dir(root.path(), "node").unwrap();
        assert_ne!(a.path(), b.path());
        assert!(a.path().starts_with(root.path()));

        let a_path = a.path().to_path_buf();
        release_run_dir(a);
        assert!(!a_path.exists());

        let b_path = b.path().to_path_buf();
        drop(b);
        assert!(!b_path.exists());
    }

    #[test]
    fn test_run_dir_in_missing_root_fails() {
        let err = create_run_dir(Path::new("/nonexistent/codequest-root"), "go").unwrap_err();
        assert!(matches!(err, HarnessError::WorkspaceCreationFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captured_combines_streams() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh")
            .with_args(["-c", "echo out; echo err 1>&2; exit 3"])
            .with_work_dir(dir.path());

        let run = run_captured(&spec, far_deadline()).await.unwrap();
        assert_eq!(run.output, "out\nerr\n");

        let result = ExecutionResult::from_run(run);
        assert!(!result.success);
        assert!(!result.timed_out);
        assert_eq!(result.exit_code, 3);
        assert!(result.error.contains('3'));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captured_success() {
        let spec = CommandSpec::new("sh").with_args(["-c", "echo Test passed"]);
        let result = ExecutionResult::from_run(run_captured(&spec, far_deadline()).await.unwrap());
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(result.error.is_empty());
        assert_eq!(result.output.trim(), "Test passed");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captured_times_out() {
        let spec = CommandSpec::new("sh").with_args(["-c", "sleep 5"]);
        let started = std::time::Instant::now();
        let run = run_captured(&spec, Instant::now() + Duration::from_millis(200))
            .await
            .unwrap();
        assert!(started.elapsed() < Duration::from_secs(4));

        let result = ExecutionResult::from_run(run);
        assert!(result.timed_out);
        assert!(!result.success);
        assert_eq!(result.exit_code, -1);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_an_error() {
        let spec = CommandSpec::new("codequest-no-such-runtime");
        let err = run_captured(&spec, far_deadline()).await.unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }
}
