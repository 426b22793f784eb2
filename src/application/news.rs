//! News lookup: a three-tier provider cascade over a mock fallback.
//!
//! Tier order is fixed: company news, then general search, then the RSS
//! feed. A tier runs only when its configuration is present; an error or an
//! empty result moves the cascade to the next tier.

use std::sync::Arc;

use chrono::Utc;

use crate::application::credentials::ProviderEnv;
use crate::domain::entities::news_item::NewsItem;
use crate::domain::entities::settings::Settings;
use crate::domain::ports::news_source::{NewsBatch, NewsSource};
use crate::domain::ports::settings_store::SettingsStore;
use crate::infrastructure::mock;
use crate::infrastructure::providers::finnhub::FinnhubNews;
use crate::infrastructure::providers::newsapi::NewsApiSearch;
use crate::infrastructure::providers::rss::RssHeadlines;

#[derive(Debug, Clone)]
pub struct NewsLookup {
    pub provider: String,
    pub items: Vec<NewsItem>,
    pub used_symbol: Option<String>,
}

pub struct NewsLookupUseCase {
    store: Arc<dyn SettingsStore>,
    env: ProviderEnv,
    client: reqwest::Client,
}

impl NewsLookupUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, env: ProviderEnv, client: reqwest::Client) -> Self {
        Self { store, env, client }
    }

    fn sources(&self, settings: &Settings) -> Vec<Arc<dyn NewsSource>> {
        let mut sources: Vec<Arc<dyn NewsSource>> = Vec::new();
        if let Some(key) = self.env.finnhub_key(settings) {
            sources.push(Arc::new(FinnhubNews::new(self.client.clone(), key)));
        }
        if let Some(key) = self.env.news_api_key(settings) {
            sources.push(Arc::new(NewsApiSearch::new(self.client.clone(), key)));
        }
        if let Some(url) = self.env.fx_factory_rss(settings) {
            sources.push(Arc::new(RssHeadlines::new(self.client.clone(), url)));
        }
        sources
    }

    pub async fn execute(&self, symbol: &str) -> NewsLookup {
        let settings = self.store.read().await;

        if let Some((provider, batch)) = first_non_empty(&self.sources(&settings), symbol).await {
            tracing::info!(
                provider = %provider,
                symbol,
                count = batch.items.len(),
                "news lookup succeeded"
            );
            return NewsLookup {
                provider,
                items: batch.items,
                used_symbol: batch.used_symbol,
            };
        }

        tracing::debug!(symbol, "serving mock headlines");
        NewsLookup {
            provider: "mock".to_string(),
            items: mock::headlines(symbol, Utc::now()),
            used_symbol: None,
        }
    }
}

/// First tier producing at least one item wins. Errors are logged and count
/// as an empty tier.
pub(crate) async fn first_non_empty(
    sources: &[Arc<dyn NewsSource>],
    symbol: &str,
) -> Option<(String, NewsBatch)> {
    for source in sources {
        match source.headlines(symbol).await {
            Ok(batch) if !batch.items.is_empty() => {
                return Some((source.name().to_string(), batch));
            }
            Ok(_) => {
                tracing::debug!(provider = source.name(), symbol, "tier empty, trying next");
            }
            Err(e) => {
                tracing::warn!(provider = source.name(), symbol, error = %e, "news source failed");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::news_item::Timestamp;
    use crate::domain::ports::SourceError;
    use async_trait::async_trait;

    struct StubSource {
        name: &'static str,
        result: Result<Vec<&'static str>, ()>,
    }

    #[async_trait]
    impl NewsSource for StubSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn headlines(&self, _symbol: &str) -> Result<NewsBatch, SourceError> {
            match &self.result {
                Ok(headlines) => Ok(NewsBatch {
                    items: headlines
                        .iter()
                        .map(|h| NewsItem {
                            headline: h.to_string(),
                            source: None,
                            url: "#".to_string(),
                            datetime: Timestamp::Epoch(0),
                        })
                        .collect(),
                    used_symbol: None,
                }),
                Err(()) => Err(SourceError::Network("timed out".into())),
            }
        }
    }

    fn stub(name: &'static str, result: Result<Vec<&'static str>, ()>) -> Arc<dyn NewsSource> {
        Arc::new(StubSource { name, result })
    }

    #[tokio::test]
    async fn test_empty_tier_falls_through() {
        let sources = vec![
            stub("primary", Ok(vec![])),
            stub("secondary", Ok(vec!["headline"])),
        ];
        let (provider, batch) = first_non_empty(&sources, "X").await.unwrap();
        assert_eq!(provider, "secondary");
        assert_eq!(batch.items.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_tier_falls_through() {
        let sources = vec![
            stub("primary", Err(())),
            stub("secondary", Ok(vec!["headline"])),
        ];
        let (provider, _) = first_non_empty(&sources, "X").await.unwrap();
        assert_eq!(provider, "secondary");
    }

    #[tokio::test]
    async fn test_tier_order_is_respected() {
        let sources = vec![
            stub("primary", Ok(vec!["first"])),
            stub("secondary", Ok(vec!["second"])),
        ];
        let (provider, batch) = first_non_empty(&sources, "X").await.unwrap();
        assert_eq!(provider, "primary");
        assert_eq!(batch.items[0].headline, "first");
    }

    #[tokio::test]
    async fn test_all_tiers_empty_yields_none() {
        let sources = vec![stub("primary", Ok(vec![])), stub("secondary", Err(()))];
        assert!(first_non_empty(&sources, "X").await.is_none());
    }
}
