use crate::domain::entities::settings::Settings;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Durable store for the settings document. Injected into every use case
/// that needs credentials or aliases; handlers never touch the file directly.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current document. A missing or unparsable backing file yields the
    /// empty document; read failures are never surfaced.
    async fn read(&self) -> Settings;

    /// Shallow-merge `update` onto the stored document, persist, and return
    /// the merged result.
    async fn write(&self, update: Settings) -> Result<Settings, DomainError>;
}
