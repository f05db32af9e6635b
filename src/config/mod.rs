pub mod schema;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::Result;
pub use schema::*;

/// Loads application configuration.
///
/// Priority, highest first:
/// 1. Environment variables (`BREV__*` prefix, double underscore for nesting)
///    - e.g. `BREV__REVIEW__BRANCH=feature/login`
///    - e.g. `BREV__LLM__DEFAULT_PROVIDER=ollama`
/// 2. Config file (`~/.config/brev/config.toml`)
/// 3. Defaults
pub fn load_config() -> Result<AppConfig> {
    let mut builder = Config::builder();

    builder = builder
        .set_default("llm.default_provider", "openai")?
        .set_default("review.repo_path", ".")?
        .set_default("review.branch", "")?
        .set_default("review.output_dir", "code_review_output")?
        .set_default("network.request_timeout", 120)?
        .set_default("network.connect_timeout", 10)?;

    if let Some(config_path) = get_config_path()
        && config_path.exists()
    {
        builder = builder.add_source(File::from(config_path));
    }

    // Double underscore separates nesting levels so field names keep
    // their single underscores (BREV__LLM__DEFAULT_PROVIDER).
    builder = builder.add_source(
        Environment::with_prefix("BREV")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let app_config: AppConfig = config.try_deserialize()?;
    Ok(app_config)
}

/// Returns `~/.config/brev/config.toml`.
fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "brev").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Returns the configuration directory path.
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "brev").map(|dirs| dirs.config_dir().to_path_buf())
}
