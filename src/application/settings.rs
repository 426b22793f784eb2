//! Settings read and update.

use std::sync::Arc;

use crate::domain::entities::settings::Settings;
use crate::domain::error::DomainError;
use crate::domain::ports::settings_store::SettingsStore;

pub struct SettingsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl SettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Settings {
        self.store.read().await
    }

    /// Whitelisting happens in the `Settings` type itself; anything that
    /// deserialized is storable.
    pub async fn update(&self, update: Settings) -> Result<Settings, DomainError> {
        self.store.write(update).await
    }
}
