//! Economic-calendar lookup: one optional provider over a mock fallback.

use std::sync::Arc;

use chrono::Utc;

use crate::application::credentials::ProviderEnv;
use crate::domain::ports::calendar_source::CalendarSource;
use crate::domain::ports::settings_store::SettingsStore;
use crate::infrastructure::mock;
use crate::infrastructure::providers::trading_economics::TradingEconomicsCalendar;

#[derive(Debug, Clone)]
pub struct CalendarLookup {
    pub provider: String,
    pub events: Vec<serde_json::Value>,
}

pub struct CalendarUseCase {
    store: Arc<dyn SettingsStore>,
    env: ProviderEnv,
    client: reqwest::Client,
}

impl CalendarUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, env: ProviderEnv, client: reqwest::Client) -> Self {
        Self { store, env, client }
    }

    pub async fn execute(&self) -> CalendarLookup {
        let settings = self.store.read().await;

        if let Some((user, key)) = self.env.trading_economics(&settings) {
            let source = TradingEconomicsCalendar::new(self.client.clone(), user, key);
            match source.events().await {
                // An empty list is still the provider's answer, not a miss.
                Ok(events) => {
                    tracing::info!(
                        provider = source.name(),
                        count = events.len(),
                        "calendar lookup succeeded"
                    );
                    return CalendarLookup {
                        provider: source.name().to_string(),
                        events,
                    };
                }
                Err(e) => {
                    tracing::warn!(provider = source.name(), error = %e, "calendar source failed");
                }
            }
        }

        tracing::debug!("serving mock calendar");
        let events = mock::econ_events(Utc::now())
            .iter()
            .filter_map(|event| serde_json::to_value(event).ok())
            .collect();
        CalendarLookup {
            provider: "mock".to_string(),
            events,
        }
    }
}
