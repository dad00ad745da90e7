use super::signing::{encode_query, sign_query};
use crate::config::settings::ApiCredentials;
use crate::domain::entities::offer::{Offer, FLEXIBLE, LOCKED};
use crate::domain::error::DomainError;
use crate::domain::ports::exchange_adapter::ExchangeAdapter;
use crate::domain::ranking::rank_by_apr;
use crate::domain::values::asset::normalize_asset;
use crate::domain::values::lenient;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

pub const BINANCE: &str = "Binance";

const FLEXIBLE_LIST_PATH: &str = "/sapi/v1/simple-earn/flexible/list";
const LOCKED_LIST_PATH: &str = "/sapi/v1/simple-earn/locked/list";
const RECV_WINDOW_MS: u32 = 5000;
/// Largest `size` the Simple Earn list endpoints accept.
const MAX_PAGE_SIZE: usize = 100;
/// Binance error codes that mean the key, secret or permissions are wrong.
const AUTH_ERROR_CODES: &[i64] = &[-2014, -2015, -1022];
const UNKNOWN_ASSET: &str = "UNKNOWN";

/// Binance Simple Earn adapter (flexible + locked products).
///
/// Needs an API key with Simple Earn read permission. Each fetch issues one
/// signed query per product category.
pub struct BinanceEarnAdapter {
    credentials: ApiCredentials,
    base_url: String,
    client: reqwest::Client,
}

impl BinanceEarnAdapter {
    pub fn with_base_url(credentials: ApiCredentials, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent("earn-scout/0.1")
                .build()
                .unwrap_or_default(),
        }
    }

    async fn fetch_rows(
        &self,
        path: &str,
        asset: Option<&str>,
        size: usize,
    ) -> Result<Vec<Value>, DomainError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(asset) = asset {
            params.push(("asset", asset.to_string()));
        }
        params.push(("current", "1".to_string()));
        params.push(("size", size.clamp(1, MAX_PAGE_SIZE).to_string()));
        params.push(("recvWindow", RECV_WINDOW_MS.to_string()));
        params.push(("timestamp", chrono::Utc::now().timestamp_millis().to_string()));

        let query = encode_query(&params);
        let signature = sign_query(self.credentials.secret(), &query)?;
        let url = format!("{}{path}?{query}&signature={signature}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .header("X-MBX-APIKEY", self.credentials.key())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, path, &body));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("{path}: {e}")))?;

        extract_rows(body).map_err(|e| DomainError::Parse(format!("{path}: {e}")))
    }
}

#[async_trait]
impl ExchangeAdapter for BinanceEarnAdapter {
    fn name(&self) -> &str {
        BINANCE
    }

    async fn fetch_top_offers(
        &self,
        asset: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Offer>, DomainError> {
        let asset = match asset {
            Some(raw) => normalize_asset(raw)?,
            None => None,
        };
        let asset = asset.as_deref();

        let (flexible_rows, locked_rows) = tokio::try_join!(
            self.fetch_rows(FLEXIBLE_LIST_PATH, asset, limit),
            self.fetch_rows(LOCKED_LIST_PATH, asset, limit),
        )?;

        debug!(
            exchange = BINANCE,
            flexible = flexible_rows.len(),
            locked = locked_rows.len(),
            "received Simple Earn rows"
        );

        let mut offers = parse_flexible_rows(&flexible_rows, asset);
        offers.extend(parse_locked_rows(&locked_rows, asset));
        Ok(rank_by_apr(offers, limit))
    }
}

fn status_error(status: reqwest::StatusCode, path: &str, body: &str) -> DomainError {
    let (code, msg) = match serde_json::from_str::<Value>(body) {
        Ok(v) => (
            v.get("code").and_then(Value::as_i64),
            v.get("msg").and_then(Value::as_str).map(String::from),
        ),
        Err(_) => (None, None),
    };
    let detail = msg.unwrap_or_else(|| body.trim().to_string());
    let message = format!("Binance API returned {status} for {path}: {detail}");

    let auth_status = status == reqwest::StatusCode::UNAUTHORIZED
        || status == reqwest::StatusCode::FORBIDDEN;
    let auth_code = code.is_some_and(|c| AUTH_ERROR_CODES.contains(&c));
    if auth_status || auth_code {
        DomainError::Auth(message)
    } else {
        DomainError::Network(message)
    }
}

/// Simple Earn lists come back as `{"rows": [...], "total": N}`; a bare array
/// is accepted too.
fn extract_rows(body: Value) -> Result<Vec<Value>, String> {
    match body {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("rows") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(rows)) => Ok(rows),
            Some(other) => Err(format!("`rows` is not an array: {other}")),
        },
        other => Err(format!("unexpected response body: {other}")),
    }
}

/// Top-level field, else `nested.key` (locked products moved most fields
/// under `detail` and `quota`).
fn lookup<'a>(row: &'a Value, key: &str, nested: Option<(&str, &str)>) -> Option<&'a Value> {
    row.get(key).filter(|v| !v.is_null()).or_else(|| {
        let (parent, child) = nested?;
        row.get(parent)?.get(child).filter(|v| !v.is_null())
    })
}

fn row_asset(value: Option<&Value>, asset_hint: Option<&str>) -> String {
    lenient::text(value)
        .or_else(|| asset_hint.map(String::from))
        .unwrap_or_else(|| UNKNOWN_ASSET.to_string())
}

fn extra_fields(row: &Value, fields: &[(&str, Option<(&str, &str)>)]) -> BTreeMap<String, Value> {
    fields
        .iter()
        .map(|(key, nested)| {
            let value = lookup(row, key, *nested).cloned().unwrap_or(Value::Null);
            (key.to_string(), value)
        })
        .collect()
}

pub(crate) fn parse_flexible_rows(rows: &[Value], asset_hint: Option<&str>) -> Vec<Offer> {
    rows.iter()
        .map(|row| {
            Offer::new(
                BINANCE,
                &row_asset(row.get("asset"), asset_hint),
                FLEXIBLE,
                lenient::rate(row.get("latestAnnualPercentageRate")),
            )
            .with_min_amount(lenient::amount(row.get("minPurchaseAmount")))
            .with_extra(extra_fields(
                row,
                &[
                    ("productId", None),
                    ("airDropPercentageRate", None),
                    ("isSoldOut", None),
                    ("hot", None),
                ],
            ))
        })
        .collect()
}

pub(crate) fn parse_locked_rows(rows: &[Value], asset_hint: Option<&str>) -> Vec<Offer> {
    rows.iter()
        .map(|row| {
            Offer::new(
                BINANCE,
                &row_asset(lookup(row, "asset", Some(("detail", "asset"))), asset_hint),
                LOCKED,
                lenient::rate(lookup(
                    row,
                    "latestAnnualPercentageRate",
                    Some(("detail", "apr")),
                )),
            )
            .with_duration_days(lenient::days(lookup(
                row,
                "duration",
                Some(("detail", "duration")),
            )))
            .with_min_amount(lenient::amount(lookup(
                row,
                "minPurchaseAmount",
                Some(("quota", "minimum")),
            )))
            .with_extra(extra_fields(
                row,
                &[
                    ("projectId", None),
                    ("soldOut", Some(("detail", "isSoldOut"))),
                    ("rewardAsset", Some(("detail", "rewardAsset"))),
                ],
            ))
        })
        .collect()
}
