//! Error types for the execution harness
//!
//! Only conditions that stop a single `execute_code` call live here. A program
//! that ran and exited non-zero (or ran past its deadline) is not an error: it
//! is an `ExecutionResult` with `success == false`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("language runtime not available: {message}")]
    RuntimeNotFound { tool: String, message: String },

    #[error("failed to initialize {language} build: {message}")]
    BuildSetupFailed { language: String, message: String },

    #[error("failed to create scratch workspace {path}: {source}")]
    WorkspaceCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Errors that make every remaining test case pointless to attempt.
    pub fn aborts_run(&self) -> bool {
        matches!(
            self,
            HarnessError::UnsupportedLanguage(_)
                | HarnessError::RuntimeNotFound { .. }
                | HarnessError::WorkspaceCreationFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
