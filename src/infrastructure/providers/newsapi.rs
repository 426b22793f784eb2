//! NewsAPI.org general news search.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::news_item::{NewsItem, Timestamp};
use crate::domain::ports::news_source::{NewsBatch, NewsSource};
use crate::domain::ports::SourceError;

const BASE_URL: &str = "https://newsapi.org/v2";

pub struct NewsApiSearch {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiSearch {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: String,
    #[serde(default)]
    source: ArticleSource,
    #[serde(default)]
    url: String,
    /// ISO-8601
    #[serde(rename = "publishedAt", default)]
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: String,
}

#[async_trait]
impl NewsSource for NewsApiSearch {
    fn name(&self) -> &str {
        "newsapi"
    }

    /// Searches the literal symbol string, newest first. No alias handling.
    async fn headlines(&self, symbol: &str) -> Result<NewsBatch, SourceError> {
        let resp = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("q", symbol),
                ("pageSize", "5"),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let body: EverythingResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        let items = body
            .articles
            .into_iter()
            .take(5)
            .map(|a| NewsItem {
                headline: a.title,
                source: Some(a.source.name),
                url: a.url,
                datetime: Timestamp::Iso(a.published_at),
            })
            .collect();

        Ok(NewsBatch {
            items,
            used_symbol: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_shape_tolerates_missing_fields() {
        let body: EverythingResponse = serde_json::from_str(
            r#"{"status":"ok","articles":[{"title":"Euro pares gains","url":"https://example.com/a"}]}"#,
        )
        .unwrap();
        assert_eq!(body.articles.len(), 1);
        assert_eq!(body.articles[0].source.name, "");
        assert_eq!(body.articles[0].published_at, "");
    }
}
