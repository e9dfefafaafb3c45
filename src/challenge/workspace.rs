//! Local challenge workspaces created by `fetch`

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::types::{Challenge, ChallengeMetadata};
use crate::languages::solution_file_name;

/// Metadata file name inside a workspace
pub const METADATA_FILE: &str = ".challenge.json";

/// Create `challenge-<slug>/` under `parent` with the solution template, a
/// README and the metadata file. Returns the workspace path.
pub fn create_workspace(challenge: &Challenge, parent: &Path) -> Result<PathBuf> {
    let work_dir = parent.join(format!("challenge-{}", challenge.slug));
    fs::create_dir_all(&work_dir).with_context(|| {
        format!("Failed to create workspace directory {}", work_dir.display())
    })?;

    let solution_file = solution_file_name(&challenge.language);
    fs::write(work_dir.join(&solution_file), &challenge.template)
        .context("Failed to create solution file")?;

    fs::write(work_dir.join("README.md"), generate_readme(challenge))
        .context("Failed to create README")?;

    let metadata = ChallengeMetadata {
        slug: challenge.slug.clone(),
        language: challenge.language.clone(),
        function_name: challenge.function_name.clone(),
        solution_file,
    };
    let content = serde_json::to_string_pretty(&metadata)?;
    fs::write(work_dir.join(METADATA_FILE), content)
        .context("Failed to create metadata file")?;

    info!("Created workspace {}", work_dir.display());
    Ok(work_dir)
}

/// Read `.challenge.json`
pub fn load_metadata(path: &Path) -> Result<ChallengeMetadata> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn generate_readme(ch: &Challenge) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", ch.title);
    let _ = writeln!(out, "**Language:** {}  ", ch.language);
    let _ = writeln!(out, "**Difficulty:** {}  ", ch.difficulty);
    let _ = writeln!(out, "**Concepts:** {}\n", ch.concept_tags.join(", "));

    if let Some(description) = ch.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "## Description\n\n{}\n", description);
    }

    out.push_str("## Function Signature\n\n");
    let _ = writeln!(out, "- **Function:** `{}`", ch.function_name);
    let _ = writeln!(out, "- **Parameters:** `{}`", ch.parameter_types.join(", "));
    let _ = writeln!(out, "- **Return Type:** `{}`\n", ch.return_type);

    out.push_str("## Test Cases\n\n");
    for (i, test_case) in ch.test_cases.iter().enumerate() {
        let inputs: Vec<String> = test_case.input.iter().map(|v| v.to_string()).collect();
        let _ = writeln!(out, "**Test {}:** {}", i + 1, test_case.description);
        let _ = writeln!(out, "- Input: `[{}]`", inputs.join(" "));
        let _ = writeln!(out, "- Expected: `{}`\n", test_case.expected);
    }

    out.push_str("## Commands\n\n");
    out.push_str("```bash\n");
    out.push_str("# Test your solution\n");
    out.push_str("codequest test\n");
    out.push_str("```\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::types::TestCase;
    use crate::languages::init_for_tests;
    use crate::value::Value;

    fn sample_challenge() -> Challenge {
        Challenge {
            title: "Test Workspace Challenge".into(),
            slug: "test-workspace-challenge".into(),
            language: "go".into(),
            difficulty: "easy".into(),
            function_name: "solve".into(),
            parameter_types: vec!["int".into()],
            return_type: "int".into(),
            template: "package main\n\nfunc solve(n int) int {\n\treturn n * 2\n}".into(),
            test_cases: vec![TestCase {
                input: vec![Value::Number(5.0)],
                expected: Value::Number(10.0),
                description: "should double the input".into(),
            }],
            concept_tags: vec!["math".into()],
            time_limit: 1000,
            memory_limit: 64,
            description: Some("A challenge for testing workspace creation".into()),
        }
    }

    #[test]
    fn test_create_workspace() {
        init_for_tests();
        let temp_dir = tempfile::tempdir().unwrap();
        let challenge = sample_challenge();

        let work_dir = create_workspace(&challenge, temp_dir.path()).unwrap();
        assert_eq!(work_dir, temp_dir.path().join("challenge-test-workspace-challenge"));

        let solution = fs::read_to_string(work_dir.join("solution.go")).unwrap();
        assert!(solution.contains("func solve(n int) int"));

        let readme = fs::read_to_string(work_dir.join("README.md")).unwrap();
        assert!(readme.contains("# Test Workspace Challenge"));
        assert!(readme.contains("should double the input"));
        assert!(readme.contains("- Input: `[5]`"));
        assert!(readme.contains("- Expected: `10`"));
        assert!(readme.contains("A challenge for testing workspace creation"));

        let metadata = load_metadata(&work_dir.join(METADATA_FILE)).unwrap();
        assert_eq!(
            metadata,
            ChallengeMetadata {
                slug: "test-workspace-challenge".into(),
                language: "go".into(),
                function_name: "solve".into(),
                solution_file: "solution.go".into(),
            }
        );
    }

    #[test]
    fn test_metadata_uses_camel_case_keys() {
        init_for_tests();
        let temp_dir = tempfile::tempdir().unwrap();
        let work_dir = create_workspace(&sample_challenge(), temp_dir.path()).unwrap();

        let raw = fs::read_to_string(work_dir.join(METADATA_FILE)).unwrap();
        assert!(raw.contains("\"functionName\""));
        assert!(raw.contains("\"solutionFile\""));
    }

    #[test]
    fn test_unknown_language_gets_txt_solution() {
        init_for_tests();
        let temp_dir = tempfile::tempdir().unwrap();
        let mut challenge = sample_challenge();
        challenge.language = "cobol".into();

        let work_dir = create_workspace(&challenge, temp_dir.path()).unwrap();
        assert!(work_dir.join("solution.txt").exists());
    }

    #[test]
    fn test_load_metadata_missing() {
        assert!(load_metadata(Path::new("/nonexistent/.challenge.json")).is_err());
    }
}
