//! Client for the Gemini `generateContent` endpoint.

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::GeminiError;

pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentRequest {
    pub fn new(config: &GeminiConfig, user_message: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{}{}", config.preamble, user_message),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if it is non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
            .filter(|text| !text.is_empty())
    }

    pub fn reply_text(&self) -> String {
        self.first_text().unwrap_or(FALLBACK_REPLY).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiClient {
    config: GeminiConfig,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Result<Self, GeminiError> {
        Self::with_config(GeminiConfig::default(), api_key)
    }

    pub fn with_config(config: GeminiConfig, api_key: &str) -> Result<Self, GeminiError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }
        Ok(Self {
            config,
            api_key: api_key.to_string(),
        })
    }

    /// Sends one prompt and returns the reply text verbatim.
    pub async fn generate(&self, user_message: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest::new(&self.config, user_message);

        let response = Request::post(&self.config.endpoint())
            .query([("key", self.api_key.as_str())])
            .json(&body)?
            .send()
            .await?;

        if !response.ok() {
            return Err(GeminiError::Status(response.status()));
        }

        let data: GenerateContentResponse = response.json().await?;
        Ok(data.reply_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::new(&GeminiConfig::default(), "What is photosynthesis?");
        let value = serde_json::to_value(&request).unwrap();

        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("You are a helpful AI study assistant."));
        assert!(text.ends_with("question: What is photosynthesis?"));

        let generation = &value["generationConfig"];
        assert_eq!(generation["topK"], 40);
        assert_eq!(generation["maxOutputTokens"], 1024);
        assert!((generation["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((generation["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_reply_text_from_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Plants turn light into sugar."}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.reply_text(), "Plants turn light into sugar.");
    }

    #[test]
    fn test_reply_text_falls_back() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.reply_text(), FALLBACK_REPLY);

        let no_parts: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert_eq!(no_parts.reply_text(), FALLBACK_REPLY);

        let blank: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]})).unwrap();
        assert_eq!(blank.reply_text(), FALLBACK_REPLY);

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(blocked.reply_text(), FALLBACK_REPLY);
    }

    #[test]
    fn test_client_requires_key() {
        assert!(matches!(GeminiClient::new("   "), Err(GeminiError::MissingApiKey)));
        assert!(GeminiClient::new("k").is_ok());
    }
}
