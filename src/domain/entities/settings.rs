use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The persisted settings document: provider credentials and user-defined
/// symbol aliases. Every field is optional. Typed deserialization is the
/// field whitelist — unknown keys in an update are dropped, not stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finnhub_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_economics_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_economics_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx_factory_rss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<HashMap<String, Vec<String>>>,
}

impl Settings {
    /// Shallow-merge an update onto this document. Present fields overwrite
    /// at the top level; `aliases` is replaced wholesale, never deep-merged.
    pub fn merge(&mut self, update: Settings) {
        if update.finnhub_key.is_some() {
            self.finnhub_key = update.finnhub_key;
        }
        if update.news_api_key.is_some() {
            self.news_api_key = update.news_api_key;
        }
        if update.trading_economics_user.is_some() {
            self.trading_economics_user = update.trading_economics_user;
        }
        if update.trading_economics_key.is_some() {
            self.trading_economics_key = update.trading_economics_key;
        }
        if update.fx_factory_rss.is_some() {
            self.fx_factory_rss = update.fx_factory_rss;
        }
        if update.aliases.is_some() {
            self.aliases = update.aliases;
        }
    }
}
