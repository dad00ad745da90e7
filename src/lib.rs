pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::gather::GatherOffersUseCase;
use crate::application::top_earn::{greeting, invalid_asset_reply, TopEarnUseCase};
use crate::config::settings::Settings;
use crate::domain::entities::offer::Offer;
use crate::domain::error::DomainError;
use crate::domain::ports::exchange_adapter::ExchangeAdapter;
use crate::domain::values::asset::normalize_asset;
use crate::infrastructure::exchanges::{build_adapters, INTEGRATED_EXCHANGES};
use std::sync::Arc;
use tracing::warn;

pub struct EarnScout {
    top_earn_uc: TopEarnUseCase,
}

impl EarnScout {
    /// Wire up every exchange that has credentials in `settings`.
    pub fn new(settings: &Settings) -> Self {
        let adapters = build_adapters(settings);
        if adapters.is_empty() {
            warn!("no exchange credentials configured; every query will come back empty");
        }
        Self::with_adapters(adapters, settings)
    }

    pub fn with_adapters(adapters: Vec<Arc<dyn ExchangeAdapter>>, settings: &Settings) -> Self {
        let gather = GatherOffersUseCase::new(
            adapters,
            settings.max_offers_per_exchange,
            settings.exchange_timeout,
        );
        Self {
            top_earn_uc: TopEarnUseCase::new(gather, settings.top_n_results),
        }
    }

    pub fn exchanges(&self) -> Vec<String> {
        self.top_earn_uc.exchanges()
    }

    pub fn greeting(&self) -> String {
        greeting(INTEGRATED_EXCHANGES, &self.exchanges())
    }

    /// Unranked offers from every exchange that answered.
    pub async fn gather_offers(&self, asset: Option<&str>) -> Vec<Offer> {
        self.top_earn_uc.gather(asset).await
    }

    pub async fn top_offers(&self, asset: Option<&str>) -> Vec<Offer> {
        self.top_earn_uc.top_offers(asset).await
    }

    pub async fn top_earn(&self, asset: Option<&str>) -> String {
        self.top_earn_uc.reply(asset).await
    }

    /// Top-offers reply for an asset argument as the user typed it.
    /// A bad ticker gets a reply explaining it, not an error.
    pub async fn top_earn_for_input(&self, raw_asset: Option<&str>) -> String {
        match raw_asset.map(normalize_asset).transpose() {
            Ok(asset) => {
                let asset = asset.flatten();
                self.top_earn(asset.as_deref()).await
            }
            Err(e) => {
                warn!(error = %e, "rejected asset filter");
                invalid_asset_reply(raw_asset.unwrap_or_default())
            }
        }
    }

    /// Answer a raw chat command (`/start`, `/help`, `/top_earn [ASSET]`).
    /// A `@botname` suffix on the command is ignored.
    pub async fn handle_command(&self, text: &str) -> Result<String, DomainError> {
        let command = text
            .split_whitespace()
            .next()
            .and_then(|c| c.split('@').next())
            .unwrap_or_default();

        match command {
            "/start" | "/help" => Ok(self.greeting()),
            "/top_earn" => {
                let raw_asset = text.split_whitespace().nth(1);
                Ok(self.top_earn_for_input(raw_asset).await)
            }
            other => Err(DomainError::InvalidInput(format!("Unknown command: {other}"))),
        }
    }
}
