use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use sardine_ingredients::{IngredientsConfig, Provider};

/// Value of `SARDINE_DB_PATH` that keeps everything in memory.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory store.
    pub db_path: Option<PathBuf>,
    pub ingredients: IngredientsConfig,
    /// `None` when simulated replies are switched off (delay of 0).
    pub community_delay: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("SARDINE_HOST", "0.0.0.0");
        let port: u16 = var("SARDINE_PORT", "3000")
            .parse()
            .context("SARDINE_PORT must be a port number")?;

        let db_path = var("SARDINE_DB_PATH", "sardine.db");
        let db_path = (db_path != IN_MEMORY).then(|| PathBuf::from(db_path));

        let provider_name = var("SARDINE_INGREDIENTS", "gemini");
        let Some(provider) = Provider::parse(&provider_name) else {
            bail!("SARDINE_INGREDIENTS must be 'gemini' or 'static', got '{}'", provider_name);
        };

        let defaults = IngredientsConfig::default();
        let ingredients = IngredientsConfig {
            provider,
            api_key: lookup("GEMINI_API_KEY").or_else(|| lookup("API_KEY")),
            model: lookup("SARDINE_GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: lookup("SARDINE_GEMINI_URL").unwrap_or(defaults.base_url),
        };

        let delay_secs: u64 = var("SARDINE_COMMUNITY_DELAY_SECS", "5")
            .parse()
            .context("SARDINE_COMMUNITY_DELAY_SECS must be whole seconds")?;
        let community_delay = (delay_secs > 0).then(|| Duration::from_secs(delay_secs));

        Ok(Self {
            host,
            port,
            db_path,
            ingredients,
            community_delay,
        })
    }
}
