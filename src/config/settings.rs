//! Runtime settings read from the environment (a `.env` file is loaded
//! first by the binary).
//!
//! | Variable                  | Default                   |
//! |---------------------------|---------------------------|
//! | `BINANCE_API_KEY`         | unset (Binance disabled)  |
//! | `BINANCE_API_SECRET`      | unset (Binance disabled)  |
//! | `BINANCE_BASE_URL`        | `https://api.binance.com` |
//! | `MAX_OFFERS_PER_EXCHANGE` | 50                        |
//! | `TOP_N_RESULTS`           | 10                        |
//! | `EXCHANGE_TIMEOUT_SECS`   | 30                        |

use std::fmt;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BINANCE_BASE_URL: &str = "https://api.binance.com";
pub const DEFAULT_MAX_OFFERS_PER_EXCHANGE: usize = 50;
pub const DEFAULT_TOP_N_RESULTS: usize = 10;
pub const DEFAULT_EXCHANGE_TIMEOUT_SECS: u64 = 30;

/// API key/secret pair. Opaque outside the adapter that signs with it.
#[derive(Clone)]
pub struct ApiCredentials {
    key: String,
    secret: String,
}

impl ApiCredentials {
    /// `None` unless both halves are non-blank.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        let secret = secret.into().trim().to_string();
        if key.is_empty() || secret.is_empty() {
            return None;
        }
        Some(Self { key, secret })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Binance credentials; the Binance adapter is enabled only when present.
    pub binance: Option<ApiCredentials>,
    pub binance_base_url: String,
    /// How many offers each exchange returns before global ranking.
    pub max_offers_per_exchange: usize,
    /// How many offers are shown to the user.
    pub top_n_results: usize,
    /// Upper bound on a single exchange fetch.
    pub exchange_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            binance: None,
            binance_base_url: DEFAULT_BINANCE_BASE_URL.to_string(),
            max_offers_per_exchange: DEFAULT_MAX_OFFERS_PER_EXCHANGE,
            top_n_results: DEFAULT_TOP_N_RESULTS,
            exchange_timeout: Duration::from_secs(DEFAULT_EXCHANGE_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Bad numeric values fall back to
    /// their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let binance = ApiCredentials::new(
            lookup("BINANCE_API_KEY").unwrap_or_default(),
            lookup("BINANCE_API_SECRET").unwrap_or_default(),
        );

        let binance_base_url = lookup("BINANCE_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BINANCE_BASE_URL.to_string());

        Self {
            binance,
            binance_base_url,
            max_offers_per_exchange: positive(
                &lookup,
                "MAX_OFFERS_PER_EXCHANGE",
                DEFAULT_MAX_OFFERS_PER_EXCHANGE as u64,
            ) as usize,
            top_n_results: positive(&lookup, "TOP_N_RESULTS", DEFAULT_TOP_N_RESULTS as u64)
                as usize,
            exchange_timeout: Duration::from_secs(positive(
                &lookup,
                "EXCHANGE_TIMEOUT_SECS",
                DEFAULT_EXCHANGE_TIMEOUT_SECS,
            )),
        }
    }
}

fn positive<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => {
            warn!(key, value = %raw, default, "ignoring invalid setting, using default");
            default
        }
    }
}
