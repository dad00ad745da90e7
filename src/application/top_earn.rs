use crate::application::format::rank_and_format;
use crate::application::gather::GatherOffersUseCase;
use crate::domain::entities::offer::Offer;
use crate::domain::ranking::rank_by_apr;

pub const PROGRESS_NOTICE: &str = "⏳ Collecting Simple Earn offers, this takes a few seconds...";

pub const NO_DATA_REPLY: &str = "Could not fetch any Simple Earn offers.\n\
     Check the API keys in `.env` and their Simple Earn / Earn permissions.";

/// Greeting/help text. Lists every integrated exchange and whether it has
/// credentials configured.
pub fn greeting(integrated: &[&str], configured: &[String]) -> String {
    let exchanges = integrated
        .iter()
        .map(|name| {
            let status = if configured.iter().any(|c| c.as_str() == *name) {
                "configured"
            } else {
                "no API keys"
            };
            format!("*{name}* ({status})")
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = format!(
        "👋 This bot finds the best-paying *Simple Earn / Earn* programs on crypto exchanges.\n\n\
         Available commands:\n\
         `/top_earn` - top programs by APR\n\
         `/top_earn BTC` - top programs for one asset (e.g. BTC, USDT)\n\n\
         Integrated exchanges: {exchanges}."
    );
    if configured.is_empty() {
        text.push_str("\nAdd API keys to `.env` to enable an exchange.");
    }
    text
}

pub fn invalid_asset_reply(raw: &str) -> String {
    format!("`{raw}` is not a valid asset ticker. Use a single ticker such as BTC or USDT.")
}

/// Gather, rank and render the "top offers" reply.
pub struct TopEarnUseCase {
    gather: GatherOffersUseCase,
    top_n: usize,
}

impl TopEarnUseCase {
    pub fn new(gather: GatherOffersUseCase, top_n: usize) -> Self {
        Self { gather, top_n }
    }

    pub fn exchanges(&self) -> Vec<String> {
        self.gather.exchanges()
    }

    pub async fn gather(&self, asset: Option<&str>) -> Vec<Offer> {
        self.gather.execute(asset).await
    }

    /// Best `top_n` offers across all exchanges.
    pub async fn top_offers(&self, asset: Option<&str>) -> Vec<Offer> {
        rank_by_apr(self.gather.execute(asset).await, self.top_n)
    }

    /// Reply text; the no-data reply when nothing came back.
    pub async fn reply(&self, asset: Option<&str>) -> String {
        let offers = self.gather.execute(asset).await;
        if offers.is_empty() {
            return NO_DATA_REPLY.to_string();
        }
        rank_and_format(offers, self.top_n, asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_lists_commands_and_exchanges() {
        let text = greeting(&["Binance"], &["Binance".to_string()]);
        assert!(text.contains("/top_earn"));
        assert!(text.contains("/top_earn BTC"));
        assert!(text.contains("Integrated exchanges: *Binance* (configured)."));
        assert!(!text.contains("Add API keys"));
    }

    #[test]
    fn test_greeting_names_exchanges_without_keys() {
        let text = greeting(&["Binance"], &[]);
        assert!(text.contains("*Binance* (no API keys)"));
        assert!(text.contains("Add API keys to `.env`"));
    }

    #[test]
    fn test_invalid_asset_reply_quotes_input() {
        let text = invalid_asset_reply("BTC-USDT");
        assert!(text.starts_with("`BTC-USDT` is not a valid asset ticker."));
    }
}
