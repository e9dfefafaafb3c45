use anyhow::{Context, Result};

use crate::challenge::{filter_challenges, load_challenges, render_challenge_list};

/// Print the catalog, optionally filtered by language and difficulty
pub fn list_challenges(language: Option<&str>, difficulty: Option<&str>) -> Result<()> {
    let challenges = load_challenges().context("Failed to load challenges")?;
    let filtered = filter_challenges(
        &challenges,
        language.unwrap_or_default(),
        difficulty.unwrap_or_default(),
    );
    print!("{}", render_challenge_list(&filtered));
    Ok(())
}
