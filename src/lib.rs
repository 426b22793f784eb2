pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod server;

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::calendar::{CalendarLookup, CalendarUseCase};
use crate::application::credentials::ProviderEnv;
use crate::application::news::{NewsLookup, NewsLookupUseCase};
use crate::application::quotes::{QuoteLookup, QuoteLookupUseCase};
use crate::application::sentiment::SentimentUseCase;
use crate::application::settings::SettingsUseCase;
use crate::domain::entities::settings::Settings;
use crate::domain::error::DomainError;
use crate::domain::ports::settings_store::SettingsStore;
use crate::domain::values::sentiment::SentimentReport;
use crate::infrastructure::settings::file::FileSettingsStore;

/// Facade wiring the use cases to a settings store and provider credentials.
/// One instance is shared across all requests.
pub struct MarketDesk {
    quotes_uc: QuoteLookupUseCase,
    news_uc: NewsLookupUseCase,
    calendar_uc: CalendarUseCase,
    sentiment_uc: SentimentUseCase,
    settings_uc: SettingsUseCase,
}

impl MarketDesk {
    /// Production wiring: file-backed settings plus environment credentials.
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        let store: Arc<dyn SettingsStore> = Arc::new(FileSettingsStore::new(settings_path));
        Self::with_store(store, ProviderEnv::from_env())
    }

    /// Explicit wiring; tests inject a store and a fixed environment.
    pub fn with_store(store: Arc<dyn SettingsStore>, env: ProviderEnv) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("marketdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            quotes_uc: QuoteLookupUseCase::new(store.clone(), env.clone(), client.clone()),
            news_uc: NewsLookupUseCase::new(store.clone(), env.clone(), client.clone()),
            calendar_uc: CalendarUseCase::new(store.clone(), env, client),
            sentiment_uc: SentimentUseCase,
            settings_uc: SettingsUseCase::new(store),
        }
    }

    pub async fn quote(&self, symbol: &str) -> QuoteLookup {
        self.quotes_uc.execute(symbol).await
    }

    pub async fn news(&self, symbol: &str) -> NewsLookup {
        self.news_uc.execute(symbol).await
    }

    pub async fn econ(&self) -> CalendarLookup {
        self.calendar_uc.execute().await
    }

    pub fn sentiment(&self, text: &str) -> SentimentReport {
        self.sentiment_uc.analyze(text)
    }

    pub async fn settings(&self) -> Settings {
        self.settings_uc.read().await
    }

    pub async fn update_settings(&self, update: Settings) -> Result<Settings, DomainError> {
        self.settings_uc.update(update).await
    }
}
