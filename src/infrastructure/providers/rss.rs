//! RSS headline source (the calendar-feed tier of the news cascade).
//!
//! Only three fields per `<item>` matter: title, link, pubDate. Titles are
//! frequently CDATA-wrapped; tag-name casing varies between feeds.

use async_trait::async_trait;
use chrono::DateTime;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use crate::domain::entities::news_item::{NewsItem, Timestamp};
use crate::domain::ports::news_source::{NewsBatch, NewsSource};
use crate::domain::ports::SourceError;

const MAX_ITEMS: usize = 5;

pub struct RssHeadlines {
    client: Client,
    feed_url: String,
}

impl RssHeadlines {
    pub fn new(client: Client, feed_url: String) -> Self {
        Self { client, feed_url }
    }
}

#[async_trait]
impl NewsSource for RssHeadlines {
    fn name(&self) -> &str {
        "fxfactory"
    }

    /// The feed is not symbol-aware; the requested symbol is ignored.
    async fn headlines(&self, _symbol: &str) -> Result<NewsBatch, SourceError> {
        let xml = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let items = parse_items(&xml, MAX_ITEMS)?;
        Ok(NewsBatch {
            items,
            used_symbol: None,
        })
    }
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Link,
    PubDate,
}

/// Pull the first `limit` items out of an RSS document.
fn parse_items(xml: &str, limit: usize) -> Result<Vec<NewsItem>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut in_item = false;
    let mut field: Option<Field> = None;
    let mut title = String::new();
    let mut link = String::new();
    let mut pub_date = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name.eq_ignore_ascii_case(b"item") {
                    in_item = true;
                    title.clear();
                    link.clear();
                    pub_date.clear();
                } else if in_item {
                    field = if name.eq_ignore_ascii_case(b"title") {
                        Some(Field::Title)
                    } else if name.eq_ignore_ascii_case(b"link") {
                        Some(Field::Link)
                    } else if name.eq_ignore_ascii_case(b"pubDate") {
                        Some(Field::PubDate)
                    } else {
                        None
                    };
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name.eq_ignore_ascii_case(b"item") {
                    in_item = false;
                    if !title.is_empty() || !link.is_empty() {
                        items.push(NewsItem {
                            headline: title.trim().to_string(),
                            source: None,
                            url: link.trim().to_string(),
                            datetime: pub_date_timestamp(pub_date.trim()),
                        });
                        if items.len() >= limit {
                            break;
                        }
                    }
                } else {
                    field = None;
                }
            }
            Ok(Event::Text(text)) => {
                if in_item {
                    if let Some(f) = field {
                        let text = text
                            .unescape()
                            .map_err(|e| SourceError::Parse(e.to_string()))?;
                        buffer(f, &mut title, &mut link, &mut pub_date).push_str(&text);
                    }
                }
            }
            Ok(Event::CData(cdata)) => {
                if in_item {
                    if let Some(f) = field {
                        let text = String::from_utf8_lossy(&cdata).into_owned();
                        buffer(f, &mut title, &mut link, &mut pub_date).push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SourceError::Parse(e.to_string())),
            _ => {}
        }
    }

    Ok(items)
}

fn buffer<'a>(
    field: Field,
    title: &'a mut String,
    link: &'a mut String,
    pub_date: &'a mut String,
) -> &'a mut String {
    match field {
        Field::Title => title,
        Field::Link => link,
        Field::PubDate => pub_date,
    }
}

/// RSS pubDates are RFC 2822; some feeds emit RFC 3339 instead. Anything
/// parseable becomes epoch milliseconds, anything else stays a raw string.
fn pub_date_timestamp(raw: &str) -> Timestamp {
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Timestamp::Epoch(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Timestamp::Epoch(dt.timestamp_millis());
    }
    Timestamp::Iso(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Calendar Feed</title>
    <link>https://example.com</link>
    <item>
      <title><![CDATA[NFP preview: what to expect]]></title>
      <link>https://example.com/nfp</link>
      <pubDate>Mon, 03 Aug 2026 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>ECB speakers today &amp; tomorrow</title>
      <link>https://example.com/ecb</link>
      <pubDate>Mon, 03 Aug 2026 09:00:00 GMT</pubDate>
    </item>
    <item><title>Three</title><link>https://example.com/3</link><pubDate>bogus date</pubDate></item>
    <item><title>Four</title><link>https://example.com/4</link><pubDate>Mon, 03 Aug 2026 06:00:00 GMT</pubDate></item>
    <item><title>Five</title><link>https://example.com/5</link><pubDate>Mon, 03 Aug 2026 05:00:00 GMT</pubDate></item>
    <item><title>Six</title><link>https://example.com/6</link><pubDate>Mon, 03 Aug 2026 04:00:00 GMT</pubDate></item>
  </channel>
</rss>"#;

    #[test]
    fn test_takes_at_most_five_items() {
        let items = parse_items(FEED, 5).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].headline, "Five");
    }

    #[test]
    fn test_cdata_title_is_unwrapped() {
        let items = parse_items(FEED, 5).unwrap();
        assert_eq!(items[0].headline, "NFP preview: what to expect");
        assert_eq!(items[0].url, "https://example.com/nfp");
    }

    #[test]
    fn test_pub_date_becomes_epoch_millis() {
        let items = parse_items(FEED, 5).unwrap();
        let expected = DateTime::parse_from_rfc2822("Mon, 03 Aug 2026 10:00:00 GMT")
            .unwrap()
            .timestamp_millis();
        assert_eq!(items[0].datetime, Timestamp::Epoch(expected));
        // Unparsable dates are kept raw rather than dropped.
        assert_eq!(items[2].datetime, Timestamp::Iso("bogus date".into()));
    }

    #[test]
    fn test_entities_are_unescaped() {
        let items = parse_items(FEED, 5).unwrap();
        assert_eq!(items[1].headline, "ECB speakers today & tomorrow");
    }

    #[test]
    fn test_channel_title_is_not_an_item() {
        let items = parse_items(FEED, 5).unwrap();
        assert!(items.iter().all(|i| i.headline != "Calendar Feed"));
    }
}
