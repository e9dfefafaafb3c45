//! Runs every test case of a challenge against a solution

use std::fmt;
use tracing::{debug, info, warn};

use crate::challenge::Challenge;
use crate::executor::CodeExecutor;
use crate::harness::generate_program;
use crate::languages;

/// Outcome of one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    TimedOut,
    /// The harness could not run the case at all
    Error,
    /// Not attempted after an error that affects every case
    Skipped,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Passed => "passed",
            Verdict::Failed => "failed",
            Verdict::TimedOut => "timed_out",
            Verdict::Error => "error",
            Verdict::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub description: String,
    pub verdict: Verdict,
    /// Wall-clock milliseconds, set when the program ran
    pub duration_ms: Option<f64>,
    /// Exit error, timeout message or harness error
    pub error: Option<String>,
    /// Combined program output
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TestReport {
    pub results: Vec<CaseResult>,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.verdict == Verdict::Passed)
    }

    pub fn passed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.verdict == Verdict::Passed)
            .count()
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Run each test case in order, one at a time.
///
/// `on_result` sees every case as soon as its outcome is known. A failing or
/// crashing case does not stop the run. An error that would repeat for
/// every case (unknown language, missing runtime, no scratch space) marks
/// the remaining cases as skipped.
pub async fn run_challenge<E, F>(
    challenge: &Challenge,
    solution: &str,
    executor: &E,
    mut on_result: F,
) -> TestReport
where
    E: CodeExecutor + ?Sized,
    F: FnMut(usize, &CaseResult),
{
    let time_limit = languages::time_limit_for(&challenge.language, challenge.time_limit);
    let mut results = Vec::with_capacity(challenge.test_cases.len());
    let mut aborted = false;

    for (i, test_case) in challenge.test_cases.iter().enumerate() {
        let result = if aborted {
            CaseResult {
                description: test_case.description.clone(),
                verdict: Verdict::Skipped,
                duration_ms: None,
                error: None,
                output: None,
            }
        } else {
            let program = generate_program(challenge, solution, test_case);
            match executor
                .execute_code(&challenge.language, &program, time_limit)
                .await
            {
                Ok(run) => {
                    let verdict = if run.success {
                        Verdict::Passed
                    } else if run.timed_out {
                        Verdict::TimedOut
                    } else {
                        Verdict::Failed
                    };
                    CaseResult {
                        description: test_case.description.clone(),
                        verdict,
                        duration_ms: Some(run.duration.as_secs_f64() * 1000.0),
                        error: non_empty(run.error),
                        output: non_empty(run.output),
                    }
                }
                Err(e) => {
                    warn!("Test case {} of '{}' could not run: {}", i + 1, challenge.slug, e);
                    aborted = e.aborts_run();
                    CaseResult {
                        description: test_case.description.clone(),
                        verdict: Verdict::Error,
                        duration_ms: None,
                        error: Some(e.to_string()),
                        output: None,
                    }
                }
            }
        };

        debug!("Test case {}: {}", i + 1, result.verdict);
        on_result(i, &result);
        results.push(result);
    }

    let report = TestReport { results };
    info!(
        "Test summary: slug={}, passed={}/{}",
        challenge.slug,
        report.passed_count(),
        report.results.len()
    );
    report
}
