mod common;

#[tokio::test]
async fn test_unconfigured_calendar_serves_three_mock_events() {
    let t = common::setup();
    let lookup = t.desk.econ().await;
    assert_eq!(lookup.provider, "mock");
    assert_eq!(lookup.events.len(), 3);

    let names: Vec<&str> = lookup
        .events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Nonfarm Payrolls", "ECB Rate Decision", "FOMC Minutes"]
    );

    assert_eq!(lookup.events[0]["country"], serde_json::json!("US"));
    assert_eq!(lookup.events[0]["impact"], serde_json::json!("High"));
    assert_eq!(lookup.events[2]["impact"], serde_json::json!("Medium"));
}

#[tokio::test]
async fn test_mock_event_dates_are_future_iso_strings() {
    let t = common::setup();
    let before = chrono::Utc::now();
    let lookup = t.desk.econ().await;

    for event in &lookup.events {
        let raw = event["date"].as_str().expect("date must be a string");
        let date = chrono::DateTime::parse_from_rfc3339(raw).expect("date must be ISO-8601");
        assert!(date > before, "mock events sit in the future");
    }
}
