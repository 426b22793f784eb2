//! File-backed settings store.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::domain::entities::settings::Settings;
use crate::domain::error::DomainError;
use crate::domain::ports::settings_store::SettingsStore;

pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn read(&self) -> Settings {
        match fs::read_to_string(&self.path).await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "settings file unparsable, treating as empty"
                    );
                    Settings::default()
                }
            },
            // An absent file is the normal first-run state.
            Err(_) => Settings::default(),
        }
    }

    async fn write(&self, update: Settings) -> Result<Settings, DomainError> {
        let mut merged = self.read().await;
        merged.merge(update);

        let text = serde_json::to_string_pretty(&merged)
            .map_err(|e| DomainError::Settings(e.to_string()))?;

        // Write-then-rename so a concurrent reader never sees a torn file.
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, &text).await {
            tracing::warn!(path = %tmp.display(), error = %e, "failed to write settings");
            return Err(DomainError::Settings(e.to_string()));
        }
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to replace settings");
            return Err(DomainError::Settings(e.to_string()));
        }

        Ok(merged)
    }
}
