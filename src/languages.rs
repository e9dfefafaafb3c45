//! Supported languages and their per-language settings

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

/// The fixed set of challenge languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    TypeScript,
    JavaScript,
    Php,
    Python,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Go,
        Language::TypeScript,
        Language::JavaScript,
        Language::Php,
        Language::Python,
    ];

    /// Look up a language by the identifier used in the catalog.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "go" => Some(Language::Go),
            "typescript" => Some(Language::TypeScript),
            "javascript" => Some(Language::JavaScript),
            "php" => Some(Language::Php),
            "python" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Php => "php",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Settings for a language that sit outside the harness itself
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageConfig {
    /// Name of the file `fetch` writes the template to (e.g., "solution.go")
    pub solution_file: String,
    /// Replaces the challenge's time limit when testing, if set
    #[serde(default)]
    pub fixed_time_limit_ms: Option<u64>,
}

impl LanguageConfig {
    /// Time limit to hand to the executor for a challenge declaring `base_time_ms`
    pub fn calculate_time_limit(&self, base_time_ms: u64) -> u64 {
        self.fixed_time_limit_ms.unwrap_or(base_time_ms)
    }
}

/// Global language configurations
static LANGUAGES: OnceLock<HashMap<String, LanguageConfig>> = OnceLock::new();

const LANGUAGES_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/files/languages.toml"));

fn parse_languages(content: &str) -> anyhow::Result<HashMap<String, LanguageConfig>> {
    let configs: HashMap<String, LanguageConfig> =
        toml::from_str(content).context("Failed to parse languages.toml")?;

    for name in configs.keys() {
        if Language::from_id(name).is_none() {
            anyhow::bail!("languages.toml configures unknown language '{}'", name);
        }
    }

    Ok(configs)
}

/// Initialize language configurations from the embedded TOML table
pub fn init_languages() -> anyhow::Result<()> {
    let languages = parse_languages(LANGUAGES_TOML)?;
    for language in Language::ALL {
        if !languages.contains_key(language.id()) {
            warn!("No settings for language '{}', using defaults", language);
        }
    }

    LANGUAGES
        .set(languages)
        .map_err(|_| anyhow::anyhow!("Languages already initialized"))?;

    Ok(())
}

/// Get language configuration by language id
pub fn get_language_config(language: &str) -> Option<LanguageConfig> {
    LANGUAGES.get()?.get(language).cloned()
}

/// Solution file name for a language, `solution.txt` when unknown
pub fn solution_file_name(language: &str) -> String {
    get_language_config(language)
        .map(|config| config.solution_file)
        .unwrap_or_else(|| "solution.txt".to_string())
}

/// Time limit used when testing a solution in `language`
pub fn time_limit_for(language: &str, base_time_ms: u64) -> u64 {
    match get_language_config(language) {
        Some(config) => config.calculate_time_limit(base_time_ms),
        None => base_time_ms,
    }
}

#[cfg(test)]
pub(crate) fn init_for_tests() {
    // Several test modules share the global table; later calls just find it set.
    let _ = init_languages();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_covers_every_language() {
        let configs = parse_languages(LANGUAGES_TOML).unwrap();
        for language in Language::ALL {
            assert!(configs.contains_key(language.id()), "missing {}", language);
        }
        assert_eq!(configs["go"].solution_file, "solution.go");
        assert_eq!(configs["go"].fixed_time_limit_ms, Some(15000));
        assert_eq!(configs["typescript"].fixed_time_limit_ms, None);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let content = r#"
[cobol]
solution_file = "solution.cob"
"#;
        assert!(parse_languages(content).is_err());
    }

    #[test]
    fn test_time_limit_override() {
        init_for_tests();
        assert_eq!(time_limit_for("go", 1000), 15000);
        assert_eq!(time_limit_for("typescript", 1000), 1000);
        assert_eq!(time_limit_for("cobol", 2000), 2000);
    }

    #[test]
    fn test_solution_file_name() {
        init_for_tests();
        assert_eq!(solution_file_name("php"), "solution.php");
        assert_eq!(solution_file_name("python"), "solution.py");
        assert_eq!(solution_file_name("cobol"), "solution.txt");
    }

    #[test]
    fn test_language_ids_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_id(language.id()), Some(language));
        }
        assert_eq!(Language::from_id("Go"), None);
    }
}
