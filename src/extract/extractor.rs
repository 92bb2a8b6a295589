//! Brief extractor with provider registry and fallback

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;
use crate::extract::{create_provider, CampaignExtractor};
use crate::types::{ExtractorConfig, PartialCampaignConfig};

/// Registry of extraction providers with a default and ordered fallback.
/// Thread-safe; clones share the same registry.
#[derive(Clone)]
pub struct BriefExtractor {
    providers: Arc<RwLock<HashMap<String, Arc<dyn CampaignExtractor>>>>,
    default_provider: Arc<RwLock<String>>,
}

impl BriefExtractor {
    /// Create a new, empty extractor
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
            default_provider: Arc::new(RwLock::new("openai".to_string())),
        }
    }

    /// Add an extraction provider (thread-safe)
    pub fn add_provider(&self, config: &ExtractorConfig) -> Result<()> {
        let provider = create_provider(config)?;
        let mut providers = self.providers.write();
        providers.insert(config.provider.clone(), Arc::from(provider));
        Ok(())
    }

    /// Set default provider (thread-safe)
    pub fn set_default_provider(&self, provider: &str) {
        let providers = self.providers.read();
        if providers.contains_key(provider) {
            let mut default = self.default_provider.write();
            *default = provider.to_string();
        }
    }

    /// Extract using the default provider
    pub async fn extract(&self, brief: &str) -> Result<PartialCampaignConfig> {
        let default_provider = self.default_provider.read().clone();
        self.extract_with_provider(brief, &default_provider).await
    }

    /// Extract using a specific provider
    pub async fn extract_with_provider(
        &self,
        brief: &str,
        provider_name: &str,
    ) -> Result<PartialCampaignConfig> {
        let start_time = Instant::now();

        // Clone the Arc so no lock is held across the await
        let provider = {
            let providers = self.providers.read();
            providers
                .get(provider_name)
                .ok_or_else(|| {
                    crate::error::MatrixError::config(format!(
                        "Provider not configured: {}",
                        provider_name
                    ))
                })?
                .clone()
        };

        let result = provider.extract(brief).await;

        match &result {
            Ok(partial) => {
                tracing::info!(
                    provider = %provider_name,
                    combinations = %partial.selections.combination_count(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Brief extraction completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %provider_name,
                    error = %e,
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Brief extraction failed"
                );
            }
        }

        result
    }

    /// Extract with fallback to the other configured providers
    pub async fn extract_with_fallback(&self, brief: &str) -> Result<PartialCampaignConfig> {
        let mut last_error = None;

        let default_provider = self.default_provider.read().clone();
        if self.has_provider(&default_provider) {
            match self.extract_with_provider(brief, &default_provider).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::warn!(provider = %default_provider, error = %e, "Default provider failed");
                    last_error = Some(e);
                }
            }
        }

        let available_providers: Vec<String> = {
            let providers = self.providers.read();
            providers
                .keys()
                .filter(|&name| name != &default_provider)
                .cloned()
                .collect()
        };

        for provider_name in available_providers {
            match self.extract_with_provider(brief, &provider_name).await {
                Ok(result) => {
                    tracing::info!(provider = %provider_name, "Fallback provider succeeded");
                    return Ok(result);
                }
                Err(e) => {
                    tracing::warn!(provider = %provider_name, error = %e, "Fallback provider failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            crate::error::MatrixError::config("No extraction providers configured")
        }))
    }

    /// Get available providers (thread-safe)
    pub fn available_providers(&self) -> Vec<String> {
        let providers = self.providers.read();
        providers.keys().cloned().collect()
    }

    /// Check if provider is available (thread-safe)
    pub fn has_provider(&self, provider: &str) -> bool {
        let providers = self.providers.read();
        providers.contains_key(provider)
    }

    /// Check if any providers are configured (thread-safe)
    pub fn is_ready(&self) -> bool {
        let providers = self.providers.read();
        !providers.is_empty()
    }
}

impl Default for BriefExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use async_trait::async_trait;

    struct FakeExtractor {
        fail: bool,
        label: &'static str,
    }

    #[async_trait]
    impl CampaignExtractor for FakeExtractor {
        async fn extract(&self, _brief: &str) -> Result<PartialCampaignConfig> {
            if self.fail {
                return Err(MatrixError::rate_limit("quota exhausted", Some(30)));
            }
            Ok(PartialCampaignConfig {
                client_code: Some(self.label.to_string()),
                ..Default::default()
            })
        }

        fn name(&self) -> &'static str {
            self.label
        }

        fn model(&self) -> &str {
            "fake-model"
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    fn with_fake(extractor: &BriefExtractor, label: &'static str, fail: bool) {
        let mut providers = extractor.providers.write();
        providers.insert(label.to_string(), Arc::new(FakeExtractor { fail, label }));
    }

    #[tokio::test]
    async fn extracts_with_default_provider() {
        let extractor = BriefExtractor::new();
        with_fake(&extractor, "openai", false);
        let partial = extractor.extract("brief").await.unwrap();
        assert_eq!(partial.client_code.as_deref(), Some("openai"));
    }

    #[tokio::test]
    async fn falls_back_when_default_fails() {
        let extractor = BriefExtractor::new();
        with_fake(&extractor, "openai", true);
        with_fake(&extractor, "anthropic", false);
        let partial = extractor.extract_with_fallback("brief").await.unwrap();
        assert_eq!(partial.client_code.as_deref(), Some("anthropic"));
    }

    #[tokio::test]
    async fn all_providers_failing_returns_last_error() {
        let extractor = BriefExtractor::new();
        with_fake(&extractor, "openai", true);
        assert!(extractor.extract_with_fallback("brief").await.is_err());
    }

    #[tokio::test]
    async fn unconfigured_provider_is_a_config_error() {
        let extractor = BriefExtractor::new();
        assert!(extractor.extract("brief").await.is_err());
        assert!(!extractor.is_ready());
    }

    #[test]
    fn default_provider_requires_registration() {
        let extractor = BriefExtractor::new();
        extractor.set_default_provider("anthropic");
        // Not registered, so the default stays unchanged
        assert_eq!(*extractor.default_provider.read(), "openai");
    }
}
