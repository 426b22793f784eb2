use serde::{Deserialize, Serialize};

use crate::application::calendar::CalendarLookup;
use crate::application::news::NewsLookup;
use crate::application::quotes::QuoteLookup;
use crate::domain::entities::news_item::NewsItem;
use crate::domain::entities::quote::Quote;
use crate::domain::entities::settings::Settings;

/// GET /api/quote and /api/news query string
#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

/// GET /api/quote response. The provider tag fields are emitted only when
/// true, matching the wire format clients already parse.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finnhub: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    pub data: Quote,
    #[serde(rename = "usedSymbol", skip_serializing_if = "Option::is_none")]
    pub used_symbol: Option<String>,
}

impl From<QuoteLookup> for QuoteResponse {
    fn from(lookup: QuoteLookup) -> Self {
        match lookup {
            QuoteLookup::Live {
                quote, used_symbol, ..
            } => Self {
                finnhub: Some(true),
                mock: None,
                data: quote,
                used_symbol: Some(used_symbol),
            },
            QuoteLookup::Mock { quote } => Self {
                finnhub: None,
                mock: Some(true),
                data: quote,
                used_symbol: None,
            },
        }
    }
}

/// GET /api/news response
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub provider: String,
    pub data: Vec<NewsItem>,
    #[serde(rename = "usedSymbol", skip_serializing_if = "Option::is_none")]
    pub used_symbol: Option<String>,
}

impl From<NewsLookup> for NewsResponse {
    fn from(lookup: NewsLookup) -> Self {
        Self {
            provider: lookup.provider,
            data: lookup.items,
            used_symbol: lookup.used_symbol,
        }
    }
}

/// GET /api/econ response
#[derive(Debug, Serialize)]
pub struct EconResponse {
    pub provider: String,
    pub data: Vec<serde_json::Value>,
}

impl From<CalendarLookup> for EconResponse {
    fn from(lookup: CalendarLookup) -> Self {
        Self {
            provider: lookup.provider,
            data: lookup.events,
        }
    }
}

/// GET and POST /api/settings success response
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub ok: bool,
    pub data: Settings,
}

/// POST /api/settings failure response
#[derive(Debug, Serialize)]
pub struct SettingsFailure {
    pub ok: bool,
    pub error: String,
}

/// POST /api/sentiment request
#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_quote_omits_live_tags() {
        let response: QuoteResponse = QuoteLookup::Mock {
            quote: Quote {
                c: 100.0,
                d: 0.0,
                dp: 0.0,
                pc: 100.0,
            },
        }
        .into();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["mock"], serde_json::json!(true));
        assert!(value.get("finnhub").is_none());
        assert!(value.get("usedSymbol").is_none());
    }

    #[test]
    fn test_live_quote_carries_used_symbol() {
        let response: QuoteResponse = QuoteLookup::Live {
            provider: "finnhub".to_string(),
            quote: Quote {
                c: 24780.2,
                d: 327.9,
                dp: 1.34,
                pc: 24452.3,
            },
            used_symbol: "GER40".to_string(),
        }
        .into();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["finnhub"], serde_json::json!(true));
        assert_eq!(value["usedSymbol"], serde_json::json!("GER40"));
        assert!(value.get("mock").is_none());
    }

    #[test]
    fn test_news_response_omits_absent_used_symbol() {
        let response: NewsResponse = NewsLookup {
            provider: "mock".to_string(),
            items: vec![],
            used_symbol: None,
        }
        .into();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["provider"], serde_json::json!("mock"));
        assert!(value.get("usedSymbol").is_none());
    }

    #[test]
    fn test_sentiment_request_tolerates_missing_text() {
        let req: SentimentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }
}
