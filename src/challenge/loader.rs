//! Challenge catalog loading and listing

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::types::Challenge;
use crate::config::get_config;

const EMBEDDED_CHALLENGES: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/files/challenges.json"));

/// Load the catalog: the configured file if there is one, otherwise the
/// catalog built into the binary.
pub fn load_challenges() -> Result<Vec<Challenge>> {
    match &get_config().challenges_path {
        Some(path) => load_challenges_from(path),
        None => parse_challenges(EMBEDDED_CHALLENGES)
            .context("Failed to parse embedded challenges JSON"),
    }
}

pub fn load_challenges_from(path: &Path) -> Result<Vec<Challenge>> {
    debug!("Loading challenges from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read challenges file {}", path.display()))?;
    parse_challenges(&content)
        .with_context(|| format!("Failed to parse challenges file {}", path.display()))
}

fn parse_challenges(content: &str) -> Result<Vec<Challenge>> {
    Ok(serde_json::from_str(content)?)
}

pub fn find_by_slug<'a>(challenges: &'a [Challenge], slug: &str) -> Option<&'a Challenge> {
    challenges.iter().find(|ch| ch.slug == slug)
}

/// Keep challenges matching both filters; an empty filter matches everything.
pub fn filter_challenges<'a>(
    challenges: &'a [Challenge],
    language: &str,
    difficulty: &str,
) -> Vec<&'a Challenge> {
    challenges
        .iter()
        .filter(|ch| language.is_empty() || ch.language.eq_ignore_ascii_case(language))
        .filter(|ch| difficulty.is_empty() || ch.difficulty.eq_ignore_ascii_case(difficulty))
        .collect()
}

/// Render the `list` table
pub fn render_challenge_list(challenges: &[&Challenge]) -> String {
    if challenges.is_empty() {
        return "No challenges found matching the criteria.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<40} {:<12} {:<10} {}", "TITLE", "LANGUAGE", "DIFFICULTY", "SLUG");
    let _ = writeln!(out, "{}", "-".repeat(80));

    for ch in challenges {
        let _ = writeln!(
            out,
            "{:<40} {:<12} {:<10} {}",
            truncate(&ch.title, 40),
            ch.language,
            ch.difficulty,
            ch.slug
        );
    }

    let _ = write!(out, "\nTotal: {} challenges\n", challenges.len());
    out
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}
