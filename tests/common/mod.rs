//! Shared test helpers.

use std::path::PathBuf;
use std::sync::Arc;

use marketdesk::application::credentials::ProviderEnv;
use marketdesk::infrastructure::settings::file::FileSettingsStore;
use marketdesk::MarketDesk;
use tempfile::TempDir;

/// A facade wired to a settings file inside a fresh temp directory, with no
/// provider credentials, so every lookup deterministically falls back to
/// mock data.
pub struct TestDesk {
    pub desk: Arc<MarketDesk>,
    pub settings_path: PathBuf,
    _dir: TempDir,
}

pub fn setup() -> TestDesk {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    let store = Arc::new(FileSettingsStore::new(&settings_path));
    let desk = Arc::new(MarketDesk::with_store(store, ProviderEnv::default()));
    TestDesk {
        desk,
        settings_path,
        _dir: dir,
    }
}
