use anyhow::{Context, Result};
use std::path::Path;

use crate::challenge::{create_workspace, find_by_slug, load_challenges};

/// Create the workspace for `slug` under `parent`
pub fn fetch_challenge(slug: &str, parent: &Path) -> Result<()> {
    let challenges = load_challenges().context("Failed to load challenges")?;
    let challenge = find_by_slug(&challenges, slug)
        .ok_or_else(|| anyhow::anyhow!("challenge '{}' not found", slug))?;

    let work_dir = create_workspace(challenge, parent).context("Failed to create workspace")?;

    println!("Challenge '{}' fetched successfully!", challenge.title);
    println!("Working directory: {}", work_dir.display());
    println!("Edit the solution file and run 'codequest test' to validate.");

    Ok(())
}
