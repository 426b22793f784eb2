use serde::{Deserialize, Serialize};

/// Publication time as the upstream provider reported it. Finnhub sends epoch
/// seconds, NewsAPI sends ISO-8601 strings, RSS pubDates become epoch
/// milliseconds. Deliberately not normalized; clients tolerate both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(i64),
    Iso(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    /// Publisher name. RSS items carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub url: String,
    pub datetime: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serializes_untagged() {
        let epoch = serde_json::to_value(Timestamp::Epoch(1700000000)).unwrap();
        assert_eq!(epoch, serde_json::json!(1700000000));

        let iso = serde_json::to_value(Timestamp::Iso("2026-08-06T12:00:00Z".into())).unwrap();
        assert_eq!(iso, serde_json::json!("2026-08-06T12:00:00Z"));
    }

    #[test]
    fn test_sourceless_item_omits_field() {
        let item = NewsItem {
            headline: "Calendar week ahead".into(),
            source: None,
            url: "#".into(),
            datetime: Timestamp::Epoch(0),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("source").is_none());
    }
}
