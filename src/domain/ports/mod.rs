pub mod calendar_source;
pub mod news_source;
pub mod quote_source;
pub mod settings_store;

use thiserror::Error;

/// Failure of a single upstream lookup. Cascades log these and move on to
/// the next source; they are never surfaced to API clients.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}
