use super::SourceError;
use crate::domain::entities::news_item::NewsItem;
use async_trait::async_trait;

/// Headlines from one provider tier. `used_symbol` is set when the provider
/// matched via an alias candidate rather than the requested symbol.
#[derive(Debug, Clone, Default)]
pub struct NewsBatch {
    pub items: Vec<NewsItem>,
    pub used_symbol: Option<String>,
}

/// A headline provider. An empty batch means "nothing here, try the next
/// tier" and is not an error.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    async fn headlines(&self, symbol: &str) -> Result<NewsBatch, SourceError>;
}
