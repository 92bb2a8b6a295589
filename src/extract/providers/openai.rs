//! OpenAI extraction provider
//!
//! Supports the OpenAI API and OpenAI-compatible endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{MatrixError, Result};
use crate::extract::CampaignExtractor;
use crate::types::{ExtractorConfig, PartialCampaignConfig};

use super::{build_extraction_prompt, parse_partial_config};

/// OpenAI extraction provider
pub struct OpenAiExtractor {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiExtractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(MatrixError::config("OpenAI API key is required"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MatrixError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            temperature: config.temperature,
        })
    }

    /// Constructs the full API URL, tolerating base URLs with or without /v1
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        if base_url.ends_with("/v1") {
            format!("{}{}", base_url, endpoint)
        } else {
            format!("{}/v1{}", base_url, endpoint)
        }
    }
}

#[async_trait]
impl CampaignExtractor for OpenAiExtractor {
    async fn extract(&self, brief: &str) -> Result<PartialCampaignConfig> {
        let request = OpenAiRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: "You extract structured campaign naming parameters from briefs and return them as a JSON object.".to_string(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: build_extraction_prompt(brief),
                },
            ],
            temperature: self.temperature,
            max_tokens: 1000,
        };

        let url = self.build_url("/chat/completions");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                MatrixError::network(
                    format!("Failed to connect to API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg = match status.as_u16() {
                401 => format!(
                    "Authentication failed (401). Please check your API key for {}",
                    self.base_url
                ),
                403 => "Access forbidden (403). Your API key may not have permission for this endpoint".to_string(),
                429 => "Rate limit exceeded (429). Please try again later".to_string(),
                500..=599 => format!(
                    "Server error ({}). The API service is experiencing issues",
                    status
                ),
                _ => format!("API request failed ({}): {}", status, error_text),
            };

            return Err(MatrixError::network(
                error_msg,
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| MatrixError::parse(e.to_string(), None))?;

        let content = openai_response
            .choices
            .first()
            .ok_or_else(|| MatrixError::internal("No response from OpenAI API"))?
            .message
            .content
            .clone();

        parse_partial_config(&content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// OpenAI API structures
#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    content: String,
}
