//! Static fallback data, returned when no live provider is configured or
//! every configured provider came up empty or failed.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::econ_event::{EconEvent, Impact};
use crate::domain::entities::news_item::{NewsItem, Timestamp};
use crate::domain::entities::quote::Quote;

/// Broker-snapshot quotes for the demo symbols. Unknown symbols get a
/// neutral placeholder so the client always has something to render.
pub fn quote(symbol: &str) -> Quote {
    let (c, d, dp, pc) = match symbol {
        "XAUUSD" => (4967.27, 178.27, 3.71, 4789.00),
        "XAGUSD" => (76.895, 0.180, 0.24, 76.715),
        "^DJI" => (50098.00, 1336.00, 2.74, 48762.00),
        "^NDX" => (25033.96, 689.20, 2.83, 24344.76),
        "^GSPC" => (6928.14, 157.25, 2.32, 6770.89),
        "GER40" | "^GDAXI" | "GER30" => (24780.2, 327.9, 1.34, 24452.3),
        "EURUSD=X" | "EURUSD" => (1.18149, 0.00375, 0.32, 1.17774),
        _ => (100.0, 0.0, 0.0, 100.0),
    };
    Quote { c, d, dp, pc }
}

/// One canned headline per demo symbol; symbols outside the table get an
/// empty list, not a placeholder.
pub fn headlines(symbol: &str, now: DateTime<Utc>) -> Vec<NewsItem> {
    let item = |headline: &str, source: &str, minutes_ago: i64| NewsItem {
        headline: headline.to_string(),
        source: Some(source.to_string()),
        url: "#".to_string(),
        datetime: Timestamp::Epoch((now - Duration::minutes(minutes_ago)).timestamp_millis()),
    };
    match symbol {
        "XAUUSD" => vec![item("Gold gains as risk-off flows increase", "Macro Desk", 60)],
        "^GDAXI" => vec![item(
            "European equities mixed amid economic data",
            "EU Markets",
            60,
        )],
        "GER40" => vec![item("GER40 up after strong tech earnings", "Broker News", 30)],
        "EURUSD=X" => vec![item(
            "Euro strengthens on hawkish ECB signals",
            "FX News",
            90,
        )],
        _ => Vec::new(),
    }
}

/// Three upcoming events with dates relative to `now`.
pub fn econ_events(now: DateTime<Utc>) -> Vec<EconEvent> {
    vec![
        EconEvent {
            country: "US".to_string(),
            event: "Nonfarm Payrolls".to_string(),
            date: now + Duration::hours(24),
            impact: Impact::High,
        },
        EconEvent {
            country: "EU".to_string(),
            event: "ECB Rate Decision".to_string(),
            date: now + Duration::hours(48),
            impact: Impact::High,
        },
        EconEvent {
            country: "US".to_string(),
            event: "FOMC Minutes".to_string(),
            date: now + Duration::hours(72),
            impact: Impact::Medium,
        },
    ]
}
