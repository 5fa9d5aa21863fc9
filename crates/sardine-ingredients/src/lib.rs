//! Ingredient labels for sealed cans.
//!
//! A [`Labeler`] wraps one [`IngredientSource`] picked by configuration and
//! never fails: when the source errors, a fixed fallback label is used.

pub mod gemini;
pub mod source;

use tracing::{info, warn};

pub use gemini::GeminiSource;
pub use source::{
    IngredientError, IngredientSource, MAX_INGREDIENTS, STATIC_INGREDIENTS, StaticSource,
};

/// Label used when the configured source fails.
pub const FAILURE_INGREDIENTS: [&str; 3] = ["Compressed Emotions", "Urban Dust", "Silent Screams"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    Static,
}

impl Provider {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Some(Provider::Gemini),
            "static" | "none" | "off" => Some(Provider::Static),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientsConfig {
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for IngredientsConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Gemini,
            api_key: None,
            model: gemini::DEFAULT_MODEL.to_string(),
            base_url: gemini::DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub struct Labeler {
    source: Box<dyn IngredientSource>,
}

impl Labeler {
    pub fn new(source: impl IngredientSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Build the source the config asks for. Gemini without an API key, or a
    /// client that cannot be built, falls back to [`StaticSource`].
    pub fn from_config(config: &IngredientsConfig) -> Self {
        let key = config.api_key.as_deref().filter(|k| !k.is_empty());

        let labeler = match (config.provider, key) {
            (Provider::Gemini, Some(key)) => {
                match GeminiSource::new(&config.base_url, &config.model, key) {
                    Ok(source) => Self::new(source),
                    Err(e) => {
                        warn!("Gemini client unavailable ({}), using static ingredients", e);
                        Self::new(StaticSource)
                    }
                }
            }
            (Provider::Gemini, None) => {
                warn!("No Gemini API key configured, using static ingredients");
                Self::new(StaticSource)
            }
            (Provider::Static, _) => Self::new(StaticSource),
        };

        info!("Ingredient source: {}", labeler.source_name());
        labeler
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Ingredients for `text`, at most [`MAX_INGREDIENTS`] of them.
    pub async fn label(&self, text: &str) -> Vec<String> {
        match self.source.suggest(text).await {
            Ok(mut ingredients) => {
                ingredients.truncate(MAX_INGREDIENTS);
                ingredients
            }
            Err(e) => {
                warn!(source = self.source.name(), "Ingredient suggestion failed: {}", e);
                FAILURE_INGREDIENTS.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct Broken;

    #[async_trait]
    impl IngredientSource for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn suggest(&self, _text: &str) -> Result<Vec<String>, IngredientError> {
            Err(IngredientError::Status(503))
        }
    }

    struct Chatty;

    #[async_trait]
    impl IngredientSource for Chatty {
        fn name(&self) -> &'static str {
            "chatty"
        }

        async fn suggest(&self, text: &str) -> Result<Vec<String>, IngredientError> {
            Ok(text.split_whitespace().map(str::to_string).collect())
        }
    }

    #[tokio::test]
    async fn test_static_source() {
        let labeler = Labeler::new(StaticSource);
        assert_eq!(labeler.label("anything").await, STATIC_INGREDIENTS.to_vec());
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let labeler = Labeler::new(Broken);
        assert_eq!(labeler.label("help").await, FAILURE_INGREDIENTS.to_vec());
    }

    #[tokio::test]
    async fn test_label_caps_length() {
        let labeler = Labeler::new(Chatty);
        assert_eq!(labeler.label("one two three four five").await, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_from_config_selection() {
        let mut config = IngredientsConfig::default();
        assert_eq!(Labeler::from_config(&config).source_name(), "static");

        config.api_key = Some(String::new());
        assert_eq!(Labeler::from_config(&config).source_name(), "static");

        config.api_key = Some("secret".into());
        assert_eq!(Labeler::from_config(&config).source_name(), "gemini");

        config.provider = Provider::Static;
        assert_eq!(Labeler::from_config(&config).source_name(), "static");
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!(Provider::parse("Gemini"), Some(Provider::Gemini));
        assert_eq!(Provider::parse(" static "), Some(Provider::Static));
        assert_eq!(Provider::parse("openai"), None);
    }
}
