//! Conversational brief extraction
//!
//! Turns a free-text campaign brief into a [`PartialCampaignConfig`] via an
//! external LLM API. The output is never trusted as pre-validated: callers
//! must route it through `PartialCampaignConfig::into_config`, the same path
//! manual input takes. Everything non-deterministic stays behind the
//! [`CampaignExtractor`] trait so tests can mock it trivially.

pub mod extractor;
pub mod providers;

pub use extractor::BriefExtractor;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExtractorConfig, PartialCampaignConfig};

/// Core trait for all extraction providers
#[async_trait]
pub trait CampaignExtractor: Send + Sync {
    /// Extract a best-effort partial configuration from a free-text brief
    async fn extract(&self, brief: &str) -> Result<PartialCampaignConfig>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Get model name being used
    fn model(&self) -> &str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available extraction providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["openai", "anthropic"]
}

/// Create an extraction provider from configuration
pub fn create_provider(config: &ExtractorConfig) -> Result<Box<dyn CampaignExtractor>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(providers::OpenAiExtractor::new(config)?)),
        "anthropic" => Ok(Box::new(providers::AnthropicExtractor::new(config)?)),
        _ => Err(crate::config_error!(
            "Unsupported extraction provider: {}. Supported providers: {}",
            config.provider,
            available_providers().join(", ")
        )),
    }
}
