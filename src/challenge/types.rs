use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One test case of a challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Arguments passed to the function, in order
    pub input: Vec<Value>,
    /// Expected return value; a sequence means several return values where
    /// the language has them
    pub expected: Value,
    pub description: String,
}

/// A challenge as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub title: String,
    pub slug: String,
    pub language: String,
    pub difficulty: String,
    pub function_name: String,
    /// Informational only
    #[serde(default)]
    pub parameter_types: Vec<String>,
    /// Informational only
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub concept_tags: Vec<String>,
    /// Milliseconds
    pub time_limit: u64,
    /// Megabytes (not enforced)
    #[serde(default)]
    pub memory_limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `.challenge.json`, written by `fetch` next to the solution file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMetadata {
    pub slug: String,
    pub language: String,
    pub function_name: String,
    pub solution_file: String,
}
