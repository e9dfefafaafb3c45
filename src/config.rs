//! Application configuration
//!
//! Loaded from the environment (and a `.env` file, if present) once at startup.

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable naming a challenge catalog file
pub const CHALLENGES_ENV: &str = "CODEQUEST_CHALLENGES";
/// Environment variable naming the parent directory for scratch workspaces
pub const SCRATCH_DIR_ENV: &str = "CODEQUEST_SCRATCH_DIR";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Catalog file to use instead of the embedded one
    pub challenges_path: Option<PathBuf>,
    /// Where scratch workspaces are created (default: system temp dir)
    pub scratch_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            challenges_path: non_empty_var(CHALLENGES_ENV).map(PathBuf::from),
            scratch_dir: non_empty_var(SCRATCH_DIR_ENV).map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize application configuration from the environment
pub fn init_config() -> anyhow::Result<()> {
    APP_CONFIG
        .set(AppConfig::from_env())
        .map_err(|_| anyhow::anyhow!("Application configuration already initialized"))?;

    Ok(())
}

/// Get application configuration
pub fn get_config() -> &'static AppConfig {
    APP_CONFIG.get().unwrap_or_else(|| {
        static DEFAULT: OnceLock<AppConfig> = OnceLock::new();

        warn!("Application configuration not initialized, using default");
        DEFAULT.get_or_init(AppConfig::default)
    })
}
