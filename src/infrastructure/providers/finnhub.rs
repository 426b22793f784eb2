//! Finnhub REST providers: price quotes and company news.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::news_item::{NewsItem, Timestamp};
use crate::domain::entities::quote::Quote;
use crate::domain::ports::news_source::{NewsBatch, NewsSource};
use crate::domain::ports::quote_source::{QuoteHit, QuoteSource};
use crate::domain::ports::SourceError;
use crate::domain::values::aliases;

const BASE_URL: &str = "https://finnhub.io/api/v1";

pub struct FinnhubQuotes {
    client: Client,
    token: String,
    base_url: String,
}

impl FinnhubQuotes {
    pub fn new(client: Client, token: String) -> Self {
        Self {
            client,
            token,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    c: Option<f64>,
    #[serde(default)]
    d: Option<f64>,
    #[serde(default)]
    dp: Option<f64>,
    #[serde(default)]
    pc: Option<f64>,
}

#[async_trait]
impl QuoteSource for FinnhubQuotes {
    fn name(&self) -> &str {
        "finnhub"
    }

    /// A failed candidate is logged and skipped; only the exhausted list
    /// counts as "no result".
    async fn lookup(&self, candidates: &[String]) -> Result<Option<QuoteHit>, SourceError> {
        for candidate in candidates {
            match self.quote_for(candidate).await {
                Ok(Some(quote)) => {
                    return Ok(Some(QuoteHit {
                        quote,
                        used_symbol: candidate.clone(),
                    }));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(candidate = %candidate, error = %e, "finnhub quote candidate failed");
                }
            }
        }
        Ok(None)
    }
}

impl FinnhubQuotes {
    async fn quote_for(&self, symbol: &str) -> Result<Option<Quote>, SourceError> {
        let resp = self
            .client
            .get(format!("{}/quote", self.base_url))
            .query(&[("symbol", symbol), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let body: QuoteResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        // Finnhub reports unknown symbols as c = 0 rather than an error.
        match body.c {
            Some(c) if c.is_finite() && c > 0.0 => Ok(Some(Quote {
                c,
                d: body.d.unwrap_or_default(),
                dp: body.dp.unwrap_or_default(),
                pc: body.pc.unwrap_or_default(),
            })),
            _ => Ok(None),
        }
    }
}

pub struct FinnhubNews {
    client: Client,
    token: String,
    base_url: String,
}

impl FinnhubNews {
    pub fn new(client: Client, token: String) -> Self {
        Self {
            client,
            token,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    headline: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    url: String,
    /// Epoch seconds
    #[serde(default)]
    datetime: i64,
}

#[async_trait]
impl NewsSource for FinnhubNews {
    fn name(&self) -> &str {
        "finnhub"
    }

    /// Company-news candidates come from the built-in alias table only;
    /// user-configured aliases apply to quote lookups, not here.
    async fn headlines(&self, symbol: &str) -> Result<NewsBatch, SourceError> {
        let to = Utc::now().date_naive();
        let from = to - Duration::days(7);

        for candidate in aliases::resolve_builtin(symbol) {
            let articles = match self.company_news(&candidate, from, to).await {
                Ok(articles) => articles,
                Err(e) => {
                    tracing::warn!(candidate = %candidate, error = %e, "finnhub news candidate failed");
                    continue;
                }
            };
            if !articles.is_empty() {
                let items = articles
                    .into_iter()
                    .take(5)
                    .map(|a| NewsItem {
                        headline: a.headline,
                        source: Some(a.source),
                        url: a.url,
                        datetime: Timestamp::Epoch(a.datetime),
                    })
                    .collect();
                return Ok(NewsBatch {
                    items,
                    used_symbol: Some(candidate),
                });
            }
        }
        Ok(NewsBatch::default())
    }
}

impl FinnhubNews {
    async fn company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Article>, SourceError> {
        let from = from.to_string();
        let to = to.to_string();
        let resp = self
            .client
            .get(format!("{}/company-news", self.base_url))
            .query(&[
                ("symbol", symbol),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("token", self.token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        resp.json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_acceptance_threshold() {
        let parse = |json: &str| -> QuoteResponse { serde_json::from_str(json).unwrap() };

        let ok = parse(r#"{"c": 231.4, "d": 1.2, "dp": 0.52, "pc": 230.2}"#);
        assert!(matches!(ok.c, Some(c) if c > 0.0));

        // Unknown symbols come back as zeros, not an error status.
        let zero = parse(r#"{"c": 0, "d": null, "dp": null, "pc": 0}"#);
        assert_eq!(zero.c, Some(0.0));
        assert_eq!(zero.d, None);
    }

    #[tokio::test]
    #[ignore = "requires FINNHUB_KEY and network access"]
    async fn test_live_quote_lookup() {
        let token = std::env::var("FINNHUB_KEY").unwrap();
        let source = FinnhubQuotes::new(Client::new(), token);
        let hit = source.lookup(&["AAPL".to_string()]).await.unwrap();
        assert!(hit.unwrap().quote.is_priced());
    }
}
