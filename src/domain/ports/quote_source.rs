use super::SourceError;
use crate::domain::entities::quote::Quote;
use async_trait::async_trait;

/// A quote found by a provider, with the candidate symbol that matched.
#[derive(Debug, Clone)]
pub struct QuoteHit {
    pub quote: Quote,
    pub used_symbol: String,
}

/// A live price-quote provider. `Ok(None)` means the provider answered but
/// had no usable price for any candidate.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn name(&self) -> &str;

    /// Try each candidate in order; the first usable price wins.
    async fn lookup(&self, candidates: &[String]) -> Result<Option<QuoteHit>, SourceError>;
}
