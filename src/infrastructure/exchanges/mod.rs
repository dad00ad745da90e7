pub mod binance;
pub mod signing;

use crate::config::settings::Settings;
use crate::domain::ports::exchange_adapter::ExchangeAdapter;
use binance::BinanceEarnAdapter;
use std::sync::Arc;
use tracing::info;

/// Every exchange with an adapter, configured or not.
pub const INTEGRATED_EXCHANGES: &[&str] = &[binance::BINANCE];

/// Adapters for every exchange that has credentials configured.
/// Exchanges without credentials are left out, not attempted.
pub fn build_adapters(settings: &Settings) -> Vec<Arc<dyn ExchangeAdapter>> {
    let mut adapters: Vec<Arc<dyn ExchangeAdapter>> = Vec::new();

    match &settings.binance {
        Some(creds) => adapters.push(Arc::new(BinanceEarnAdapter::with_base_url(
            creds.clone(),
            settings.binance_base_url.clone(),
        ))),
        None => info!(exchange = binance::BINANCE, "no credentials, skipping"),
    }

    adapters
}
