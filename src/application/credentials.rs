//! Provider-credential resolution.
//!
//! The settings document is the user-facing configuration surface; the
//! process environment is the operator fallback. A settings value wins over
//! its environment counterpart; blank strings count as unset either way.

use crate::domain::entities::settings::Settings;

#[derive(Debug, Clone, Default)]
pub struct ProviderEnv {
    pub finnhub_key: Option<String>,
    pub news_api_key: Option<String>,
    pub trading_economics_user: Option<String>,
    pub trading_economics_key: Option<String>,
    pub fx_factory_rss: Option<String>,
}

impl ProviderEnv {
    pub fn from_env() -> Self {
        Self {
            finnhub_key: non_empty_var("FINNHUB_KEY"),
            news_api_key: non_empty_var("NEWSAPI_KEY"),
            trading_economics_user: non_empty_var("TRADINGECONOMICS_USER"),
            trading_economics_key: non_empty_var("TRADINGECONOMICS_KEY"),
            fx_factory_rss: non_empty_var("FXFACTORY_RSS"),
        }
    }

    pub fn finnhub_key(&self, settings: &Settings) -> Option<String> {
        pick(&settings.finnhub_key, &self.finnhub_key)
    }

    pub fn news_api_key(&self, settings: &Settings) -> Option<String> {
        pick(&settings.news_api_key, &self.news_api_key)
    }

    /// The calendar provider needs both halves of the credential pair.
    pub fn trading_economics(&self, settings: &Settings) -> Option<(String, String)> {
        let user = pick(&settings.trading_economics_user, &self.trading_economics_user)?;
        let key = pick(&settings.trading_economics_key, &self.trading_economics_key)?;
        Some((user, key))
    }

    pub fn fx_factory_rss(&self, settings: &Settings) -> Option<String> {
        pick(&settings.fx_factory_rss, &self.fx_factory_rss)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn pick(from_settings: &Option<String>, from_env: &Option<String>) -> Option<String> {
    from_settings
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .or(from_env.as_ref())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_value_wins_over_env() {
        let env = ProviderEnv {
            finnhub_key: Some("env-key".into()),
            ..ProviderEnv::default()
        };
        let settings = Settings {
            finnhub_key: Some("user-key".into()),
            ..Settings::default()
        };
        assert_eq!(env.finnhub_key(&settings).as_deref(), Some("user-key"));
    }

    #[test]
    fn test_env_fills_in_when_settings_blank() {
        let env = ProviderEnv {
            finnhub_key: Some("env-key".into()),
            ..ProviderEnv::default()
        };
        assert_eq!(
            env.finnhub_key(&Settings::default()).as_deref(),
            Some("env-key")
        );

        let blank = Settings {
            finnhub_key: Some("   ".into()),
            ..Settings::default()
        };
        assert_eq!(env.finnhub_key(&blank).as_deref(), Some("env-key"));
    }

    #[test]
    fn test_unconfigured_is_none() {
        assert!(ProviderEnv::default()
            .finnhub_key(&Settings::default())
            .is_none());
    }

    #[test]
    fn test_calendar_needs_both_credentials() {
        let env = ProviderEnv {
            trading_economics_user: Some("guest".into()),
            ..ProviderEnv::default()
        };
        assert!(env.trading_economics(&Settings::default()).is_none());

        let settings = Settings {
            trading_economics_key: Some("guest:guest".into()),
            ..Settings::default()
        };
        assert_eq!(
            env.trading_economics(&settings),
            Some(("guest".to_string(), "guest:guest".to_string()))
        );
    }
}
