//! Harness generation
//!
//! Turns (challenge, submitted source, one test case) into a complete program
//! for the challenge's language. The program calls the challenge function
//! with the test inputs, compares the result to the expected value, prints
//! `Test passed` or an `Expected: … Got: …` line, and exits 0 or 1
//! accordingly.
//!
//! This module does NOT:
//! - Run anything (that's the executor's job)
//! - Validate argument counts; a mismatch shows up when the program runs

pub mod go;
pub mod php;
pub mod render;
pub mod sanitizer;
pub mod script;

use tracing::debug;

use crate::challenge::{Challenge, TestCase};
use crate::languages::Language;

/// Build the program for one test case.
///
/// Languages without a harness (Python, or anything unrecognised) get the
/// source back unchanged.
pub fn generate_program(challenge: &Challenge, source: &str, test_case: &TestCase) -> String {
    match Language::from_id(&challenge.language) {
        Some(Language::TypeScript) | Some(Language::JavaScript) => {
            script::generate(challenge, source, test_case)
        }
        Some(Language::Php) => php::generate(challenge, source, test_case),
        Some(Language::Go) => go::generate(challenge, source, test_case),
        Some(Language::Python) | None => {
            debug!(
                "No harness for language '{}', running source as-is",
                challenge.language
            );
            source.to_string()
        }
    }
}
