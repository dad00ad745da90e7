use serde::Serialize;
use std::collections::BTreeMap;

pub const FLEXIBLE: &str = "flexible";
pub const LOCKED: &str = "locked";

/// One yield-earning product available on one exchange.
///
/// Built once by an adapter's parsing step and never mutated afterwards.
/// `apr` is a fraction (0.05 == 5%) and is never negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    pub exchange: String,
    pub asset: String,
    /// Adapter-defined category tag, e.g. "flexible" or "locked".
    pub product_type: String,
    pub apr: f64,
    /// Lock-up term; `None` for products without one.
    pub duration_days: Option<u32>,
    /// Minimum purchase in units of `asset`.
    pub min_amount: Option<f64>,
    /// Provider-specific passthrough fields (product ids, promo flags).
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Offer {
    pub fn new(exchange: &str, asset: &str, product_type: &str, apr: f64) -> Self {
        Self {
            exchange: exchange.to_string(),
            asset: asset.to_string(),
            product_type: product_type.to_string(),
            apr: if apr.is_finite() && apr > 0.0 { apr } else { 0.0 },
            duration_days: None,
            min_amount: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_duration_days(mut self, days: Option<u32>) -> Self {
        self.duration_days = days;
        self
    }

    pub fn with_min_amount(mut self, amount: Option<f64>) -> Self {
        self.min_amount = amount;
        self
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    /// APR as a percentage (0.05 -> 5.0).
    pub fn apr_percent(&self) -> f64 {
        self.apr * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_offer_defaults() {
        let offer = Offer::new("Binance", "BTC", FLEXIBLE, 0.05);
        assert_eq!(offer.exchange, "Binance");
        assert_eq!(offer.asset, "BTC");
        assert_eq!(offer.product_type, "flexible");
        assert_eq!(offer.apr, 0.05);
        assert!(offer.duration_days.is_none());
        assert!(offer.min_amount.is_none());
        assert!(offer.extra.is_empty());
    }

    #[test]
    fn test_negative_or_nan_apr_clamped() {
        assert_eq!(Offer::new("Binance", "BTC", FLEXIBLE, -0.1).apr, 0.0);
        assert_eq!(Offer::new("Binance", "BTC", FLEXIBLE, f64::NAN).apr, 0.0);
        assert_eq!(Offer::new("Binance", "BTC", FLEXIBLE, f64::INFINITY).apr, 0.0);
    }

    #[test]
    fn test_locked_offer() {
        let offer = Offer::new("Binance", "USDT", LOCKED, 0.12).with_duration_days(Some(30));
        assert_eq!(offer.duration_days, Some(30));
        assert!((offer.apr_percent() - 12.0).abs() < 1e-9);
    }
}
