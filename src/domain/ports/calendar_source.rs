use super::SourceError;
use async_trait::async_trait;

/// An economic-calendar provider. Entries are passed through verbatim as raw
/// JSON values; only the mock fallback has a typed shape.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    fn name(&self) -> &str;

    async fn events(&self) -> Result<Vec<serde_json::Value>, SourceError>;
}
