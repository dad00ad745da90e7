use crate::domain::entities::offer::Offer;
use crate::domain::error::DomainError;
use crate::domain::ports::exchange_adapter::ExchangeAdapter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Fans out one fetch per configured exchange and concatenates whatever
/// comes back. A failing exchange contributes nothing; it never fails the
/// whole gather.
pub struct GatherOffersUseCase {
    adapters: Vec<Arc<dyn ExchangeAdapter>>,
    per_exchange_limit: usize,
    timeout: Duration,
}

impl GatherOffersUseCase {
    pub fn new(
        adapters: Vec<Arc<dyn ExchangeAdapter>>,
        per_exchange_limit: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            adapters,
            per_exchange_limit,
            timeout,
        }
    }

    pub fn exchanges(&self) -> Vec<String> {
        self.adapters.iter().map(|a| a.name().to_string()).collect()
    }

    /// Offers from every exchange that answered, in no particular
    /// cross-exchange order. Empty when nothing is configured or every
    /// exchange failed.
    pub async fn execute(&self, asset: Option<&str>) -> Vec<Offer> {
        let mut handles = Vec::with_capacity(self.adapters.len());

        for adapter in &self.adapters {
            let adapter = Arc::clone(adapter);
            let asset = asset.map(String::from);
            let limit = self.per_exchange_limit;
            let timeout = self.timeout;
            let name = adapter.name().to_string();

            // One task per exchange; a slow exchange must not stall the rest.
            let handle = tokio::spawn(async move {
                let fetch = adapter.fetch_top_offers(asset.as_deref(), limit);
                match tokio::time::timeout(timeout, fetch).await {
                    Ok(result) => result,
                    Err(_) => Err(DomainError::Timeout(format!(
                        "no response within {}s",
                        timeout.as_secs_f64()
                    ))),
                }
            });
            handles.push((name, handle));
        }

        let mut offers = Vec::new();
        for (exchange, handle) in handles {
            match handle.await {
                Ok(Ok(fetched)) => {
                    info!(exchange = %exchange, count = fetched.len(), "fetched offers");
                    offers.extend(fetched);
                }
                Ok(Err(e)) => {
                    warn!(exchange = %exchange, error = %e, "exchange fetch failed");
                }
                Err(e) => {
                    warn!(exchange = %exchange, error = %e, "exchange fetch task aborted");
                }
            }
        }

        offers
    }
}
