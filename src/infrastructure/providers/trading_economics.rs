//! TradingEconomics economic-calendar provider.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::ports::calendar_source::CalendarSource;
use crate::domain::ports::SourceError;

const BASE_URL: &str = "https://api.tradingeconomics.com";
const MAX_EVENTS: usize = 20;

pub struct TradingEconomicsCalendar {
    client: Client,
    username: String,
    password: String,
    base_url: String,
}

impl TradingEconomicsCalendar {
    pub fn new(client: Client, username: String, password: String) -> Self {
        Self {
            client,
            username,
            password,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl CalendarSource for TradingEconomicsCalendar {
    fn name(&self) -> &str {
        "tradingeconomics"
    }

    /// One request over the provider's full window; entries pass through
    /// verbatim, capped at 20.
    async fn events(&self) -> Result<Vec<Value>, SourceError> {
        let resp = self
            .client
            .get(format!("{}/calendar", self.base_url))
            .query(&[
                ("cDate", "1970-01-01"),
                ("c", "all"),
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        entries_from(body)
    }
}

/// Only a JSON array counts as a calendar; credential errors come back as an
/// object and fall through to the mock calendar via the parse error.
fn entries_from(body: Value) -> Result<Vec<Value>, SourceError> {
    match body {
        Value::Array(entries) => Ok(entries.into_iter().take(MAX_EVENTS).collect()),
        _ => Err(SourceError::Parse(
            "calendar response is not a list".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_body_is_capped_at_twenty() {
        let body = Value::Array((0..30).map(|i| serde_json::json!({"id": i})).collect());
        let entries = entries_from(body).unwrap();
        assert_eq!(entries.len(), 20);
        assert_eq!(entries[0], serde_json::json!({"id": 0}));
    }

    #[test]
    fn test_short_array_passes_through_verbatim() {
        let body = serde_json::json!([{"Country":"US","Event":"CPI"}]);
        let entries = entries_from(body).unwrap();
        assert_eq!(entries, vec![serde_json::json!({"Country":"US","Event":"CPI"})]);
    }

    #[test]
    fn test_error_object_is_a_parse_failure() {
        let body = serde_json::json!({"message": "invalid credentials"});
        assert!(matches!(
            entries_from(body),
            Err(SourceError::Parse(_))
        ));
    }
}
