//! Hyperliquid info-endpoint client
//!
//! Both collaborator traits are served by the same `POST /info` endpoint:
//!
//! - `{"type": "metaAndAssetCtxs"}` returns `[meta, assetCtxs]` where
//!   `meta.universe[i].name` names the asset whose prices live in
//!   `assetCtxs[i]`.
//! - `{"type": "userFills", "user": ..., "aggregateByTime": true}`
//!   returns the recent fills for one wallet address.
//!
//! All prices arrive as JSON strings and are parsed leniently.

use crate::analyzer_core::{Fill, PriceSnapshot, RawFill};
use crate::sources::{FillSource, PriceSource, SourceError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub const MAINNET_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

#[derive(Debug, Deserialize)]
struct Meta {
    universe: Vec<UniverseEntry>,
}

#[derive(Debug, Deserialize)]
struct UniverseEntry {
    name: String,
}

/// Per-asset price context. Any of the price fields may be absent or
/// non-numeric for illiquid assets.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetCtx {
    #[serde(default)]
    mid_px: Option<String>,
    #[serde(default)]
    mark_px: Option<String>,
    #[serde(default)]
    oracle_px: Option<String>,
    #[serde(default)]
    prev_day_px: Option<String>,
}

impl AssetCtx {
    /// Current price in source priority order: mid, mark, oracle. An
    /// unparseable entry falls through to the next source.
    fn current_price(&self) -> Option<f64> {
        [&self.mid_px, &self.mark_px, &self.oracle_px]
            .into_iter()
            .find_map(|px| px.as_deref().and_then(|s| s.parse().ok()))
    }

    fn prev_day_price(&self) -> Option<f64> {
        self.prev_day_px.as_deref().and_then(|s| s.parse().ok())
    }
}

pub struct HyperliquidClient {
    http: reqwest::Client,
    info_url: String,
}

impl HyperliquidClient {
    pub fn new(info_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            info_url: info_url.into(),
        })
    }

    pub fn mainnet(timeout: Duration) -> Result<Self, SourceError> {
        Self::new(MAINNET_INFO_URL, timeout)
    }

    async fn info(&self, payload: serde_json::Value) -> Result<reqwest::Response, SourceError> {
        let response = self.http.post(&self.info_url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response)
    }
}

fn snapshot_from_ctxs(meta: &Meta, ctxs: &[AssetCtx]) -> PriceSnapshot {
    let mut snapshot = PriceSnapshot::default();
    for (entry, ctx) in meta.universe.iter().zip(ctxs.iter()) {
        if let Some(price) = ctx.current_price() {
            snapshot.current.insert(entry.name.clone(), price);
        }
        if let Some(price) = ctx.prev_day_price() {
            snapshot.prev_day.insert(entry.name.clone(), price);
        }
    }
    snapshot
}

#[async_trait]
impl PriceSource for HyperliquidClient {
    async fn snapshot(&self) -> Result<PriceSnapshot, SourceError> {
        let response = self.info(json!({"type": "metaAndAssetCtxs"})).await?;
        let (meta, ctxs): (Meta, Vec<AssetCtx>) = response.json().await?;

        let snapshot = snapshot_from_ctxs(&meta, &ctxs);
        log::info!("fetched current prices for {} assets", snapshot.current.len());
        Ok(snapshot)
    }
}

#[async_trait]
impl FillSource for HyperliquidClient {
    async fn user_fills(&self, address: &str) -> Result<Vec<Fill>, SourceError> {
        let response = self
            .info(json!({
                "type": "userFills",
                "user": address,
                "aggregateByTime": true,
            }))
            .await?;
        let raw: Vec<RawFill> = response.json().await?;

        let fills: Vec<Fill> = raw
            .iter()
            .filter_map(|r| Fill::from_raw(r, address))
            .collect();
        if fills.len() < raw.len() {
            log::warn!(
                "dropped {} malformed fills for {}",
                raw.len() - fills.len(),
                address
            );
        }
        Ok(fills)
    }
}
