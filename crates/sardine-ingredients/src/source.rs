use async_trait::async_trait;
use thiserror::Error;

/// Most ingredients printed on one label.
pub const MAX_INGREDIENTS: usize = 3;

#[derive(Debug, Error)]
pub enum IngredientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("suggestion service returned status {0}")]
    Status(u16),

    #[error("malformed suggestion payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Something that can read a message and suggest satirical "ingredients"
/// for its can label.
#[async_trait]
pub trait IngredientSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn suggest(&self, text: &str) -> Result<Vec<String>, IngredientError>;
}

/// Returns the same label every time. Used when no suggestion service is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

pub const STATIC_INGREDIENTS: [&str; 3] = [
    "100% Pure Stress",
    "Trace amounts of Hope",
    "High Caffeine Content",
];

#[async_trait]
impl IngredientSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn suggest(&self, _text: &str) -> Result<Vec<String>, IngredientError> {
        Ok(STATIC_INGREDIENTS.iter().map(|s| s.to_string()).collect())
    }
}
