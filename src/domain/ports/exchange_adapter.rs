use crate::domain::entities::offer::Offer;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Per-exchange integration producing uniform offers.
/// Implementations exist per exchange (Binance today); the aggregator only
/// sees this trait.
#[async_trait]
pub trait ExchangeAdapter: Send + Sync {
    /// Exchange name used in logs and on each offer (e.g., "Binance").
    fn name(&self) -> &str;

    /// Fetch the exchange's best offers, APR descending, at most `limit` of them.
    /// `asset` narrows the query server-side when given.
    ///
    /// Network and auth failures are returned, not swallowed.
    async fn fetch_top_offers(
        &self,
        asset: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Offer>, DomainError>;
}
