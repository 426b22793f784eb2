use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expected market impact of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// An economic-calendar event in the shape the mock calendar produces. Live
/// provider entries are passed through as raw JSON and never converted into
/// this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconEvent {
    pub country: String,
    pub event: String,
    /// ISO-8601
    pub date: DateTime<Utc>,
    pub impact: Impact,
}
