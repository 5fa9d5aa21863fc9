//! Gemini-backed ingredient suggestions.
//!
//! Uses the `generateContent` endpoint with a JSON response schema so the
//! model answers with `{ "ingredients": [..] }` directly.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::source::{IngredientError, IngredientSource, MAX_INGREDIENTS};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Label used when the model answers without an ingredient list.
pub const UNKNOWN_INGREDIENTS: [&str; 2] = ["Unknown Contents", "Mystery Meat"];

#[derive(Clone)]
pub struct GeminiSource {
    base_url: String,
    model: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl GeminiSource {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, IngredientError> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()?,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(text: &str) -> Value {
        let prompt = format!(
            "Analyze the following text from a stressed worker and generate a satirical \
             \"Ingredients List\" (max {MAX_INGREDIENTS} items) for a sardine can label.\n\
             The ingredients should be metaphorical (e.g., \"50g of Unpaid Overtime\", \
             \"Essence of Imposter Syndrome\").\n\
             Keep it short, punchy, and witty.\n\n\
             User Text: \"{text}\""
        );

        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "ingredients": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "List of metaphorical ingredients"
                        }
                    }
                }
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IngredientList {
    ingredients: Option<Vec<String>>,
}

/// Pull the ingredient list out of a `generateContent` response body.
pub fn parse_generate_response(body: &str) -> Result<Vec<String>, IngredientError> {
    let response: GenerateResponse = serde_json::from_str(body)?;

    let text = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "{}".to_string());

    let list: IngredientList = serde_json::from_str(&text)?;
    let mut ingredients = match list.ingredients {
        Some(items) => items,
        None => UNKNOWN_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
    };
    ingredients.truncate(MAX_INGREDIENTS);
    Ok(ingredients)
}

#[async_trait]
impl IngredientSource for GeminiSource {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn suggest(&self, text: &str) -> Result<Vec<String>, IngredientError> {
        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_request(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngredientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let ingredients = parse_generate_response(&body)?;
        debug!(model = %self.model, count = ingredients.len(), "gemini suggested ingredients");
        Ok(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn test_parse_ingredients() {
        let body = wrap(r#"{"ingredients":["Unpaid Overtime","Imposter Syndrome"]}"#);
        assert_eq!(
            parse_generate_response(&body).unwrap(),
            vec!["Unpaid Overtime", "Imposter Syndrome"]
        );
    }

    #[test]
    fn test_parse_truncates() {
        let body = wrap(r#"{"ingredients":["a","b","c","d","e"]}"#);
        assert_eq!(parse_generate_response(&body).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_list_is_unknown() {
        assert_eq!(
            parse_generate_response(&wrap("{}")).unwrap(),
            UNKNOWN_INGREDIENTS.to_vec()
        );
        assert_eq!(
            parse_generate_response(r#"{"candidates":[]}"#).unwrap(),
            UNKNOWN_INGREDIENTS.to_vec()
        );
    }

    #[test]
    fn test_garbage_text_is_error() {
        assert!(parse_generate_response(&wrap("not json at all")).is_err());
        assert!(parse_generate_response("<html>").is_err());
    }

    #[test]
    fn test_request_shape() {
        let req = GeminiSource::build_request("my boss");
        assert!(req["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("User Text: \"my boss\""));
        assert_eq!(req["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_generate_url() {
        let source = GeminiSource::new("http://localhost:9/", "m1", "k").unwrap();
        assert_eq!(source.generate_url(), "http://localhost:9/v1beta/models/m1:generateContent");
    }
}
