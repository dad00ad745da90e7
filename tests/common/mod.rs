//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use earn_scout::config::settings::Settings;
use earn_scout::domain::entities::offer::{Offer, FLEXIBLE};
use earn_scout::domain::error::DomainError;
use earn_scout::domain::ports::exchange_adapter::ExchangeAdapter;
use earn_scout::EarnScout;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Returns a fixed list of offers and counts how often it was called.
pub struct StaticAdapter {
    name: String,
    offers: Vec<Offer>,
    pub calls: AtomicUsize,
}

impl StaticAdapter {
    pub fn new(name: &str, offers: Vec<Offer>) -> Self {
        Self {
            name: name.to_string(),
            offers,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ExchangeAdapter for StaticAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_top_offers(
        &self,
        asset: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Offer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .offers
            .iter()
            .filter(|o| asset.map_or(true, |a| o.asset == a))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Always fails with a network error.
pub struct FailingAdapter;

#[async_trait]
impl ExchangeAdapter for FailingAdapter {
    fn name(&self) -> &str {
        "Broken"
    }

    async fn fetch_top_offers(
        &self,
        _asset: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<Offer>, DomainError> {
        Err(DomainError::Network("connection refused".into()))
    }
}

/// Sleeps for `delay` before answering with its offers.
pub struct SlowAdapter {
    pub delay: Duration,
    pub offers: Vec<Offer>,
}

#[async_trait]
impl ExchangeAdapter for SlowAdapter {
    fn name(&self) -> &str {
        "Slow"
    }

    async fn fetch_top_offers(
        &self,
        _asset: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<Offer>, DomainError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.offers.clone())
    }
}

/// Panics mid-fetch.
pub struct PanickingAdapter;

#[async_trait]
impl ExchangeAdapter for PanickingAdapter {
    fn name(&self) -> &str {
        "Panicky"
    }

    async fn fetch_top_offers(
        &self,
        _asset: Option<&str>,
        _limit: usize,
    ) -> Result<Vec<Offer>, DomainError> {
        panic!("adapter bug");
    }
}

pub fn offer(exchange: &str, asset: &str, apr: f64) -> Offer {
    Offer::new(exchange, asset, FLEXIBLE, apr)
}

pub fn setup(adapters: Vec<Arc<dyn ExchangeAdapter>>) -> EarnScout {
    EarnScout::with_adapters(adapters, &Settings::default())
}

pub fn setup_with(adapters: Vec<Arc<dyn ExchangeAdapter>>, settings: Settings) -> EarnScout {
    EarnScout::with_adapters(adapters, &settings)
}
