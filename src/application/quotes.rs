//! Quote lookup: alias resolution, provider cascade, mock fallback.

use std::sync::Arc;

use crate::application::credentials::ProviderEnv;
use crate::domain::entities::quote::Quote;
use crate::domain::entities::settings::Settings;
use crate::domain::ports::quote_source::{QuoteHit, QuoteSource};
use crate::domain::ports::settings_store::SettingsStore;
use crate::domain::values::aliases;
use crate::infrastructure::mock;
use crate::infrastructure::providers::finnhub::FinnhubQuotes;

/// Outcome of a lookup: a live provider hit or the mock table.
#[derive(Debug, Clone)]
pub enum QuoteLookup {
    Live {
        provider: String,
        quote: Quote,
        used_symbol: String,
    },
    Mock {
        quote: Quote,
    },
}

pub struct QuoteLookupUseCase {
    store: Arc<dyn SettingsStore>,
    env: ProviderEnv,
    client: reqwest::Client,
}

impl QuoteLookupUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, env: ProviderEnv, client: reqwest::Client) -> Self {
        Self { store, env, client }
    }

    /// Sources in priority order, given what is configured right now. Only
    /// one vendor today; the list keeps a second one a one-line change.
    fn sources(&self, settings: &Settings) -> Vec<Arc<dyn QuoteSource>> {
        let mut sources: Vec<Arc<dyn QuoteSource>> = Vec::new();
        if let Some(key) = self.env.finnhub_key(settings) {
            sources.push(Arc::new(FinnhubQuotes::new(self.client.clone(), key)));
        }
        sources
    }

    pub async fn execute(&self, symbol: &str) -> QuoteLookup {
        let settings = self.store.read().await;
        let candidates = aliases::resolve(symbol, &settings);

        if let Some((provider, hit)) = first_hit(&self.sources(&settings), &candidates).await {
            tracing::info!(
                provider = %provider,
                symbol,
                used = %hit.used_symbol,
                price = hit.quote.c,
                "quote lookup succeeded"
            );
            return QuoteLookup::Live {
                provider,
                quote: hit.quote,
                used_symbol: hit.used_symbol,
            };
        }

        tracing::debug!(symbol, "serving mock quote");
        QuoteLookup::Mock {
            quote: mock::quote(symbol),
        }
    }
}

/// Iterate sources in priority order; the first hit wins. Source errors are
/// logged and count as "no result from this source".
pub(crate) async fn first_hit(
    sources: &[Arc<dyn QuoteSource>],
    candidates: &[String],
) -> Option<(String, QuoteHit)> {
    for source in sources {
        match source.lookup(candidates).await {
            Ok(Some(hit)) => return Some((source.name().to_string(), hit)),
            Ok(None) => {
                tracing::warn!(
                    provider = source.name(),
                    "no usable price for any candidate"
                );
            }
            Err(e) => {
                tracing::warn!(provider = source.name(), error = %e, "quote source failed");
            }
        }
    }
    None
}
