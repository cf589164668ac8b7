//! Per-asset summary rows assembled from window buckets

use super::prices::{self, PriceSnapshot};
use super::window::{CoinMetrics, WindowBucket, WindowSize};
use std::collections::HashMap;

/// Metrics for one asset within one trailing window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowStats {
    /// Traded size times the current reference price.
    pub volume_usd: f64,
    pub long_pct: f64,
    pub short_pct: f64,
    pub traders: usize,
}

/// Size-weighted average entry prices over the 24h window's opening
/// fills. None means zero open size on that side, not a zero price.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntryPrices {
    pub combined: Option<f64>,
    pub long: Option<f64>,
    pub short: Option<f64>,
}

impl EntryPrices {
    fn from_accumulators(metrics: &CoinMetrics) -> Self {
        let weighted = |value: f64, size: f64| {
            if size > 0.0 {
                Some(value / size)
            } else {
                None
            }
        };
        Self {
            combined: weighted(
                metrics.long_value + metrics.short_value,
                metrics.long_size + metrics.short_size,
            ),
            long: weighted(metrics.long_value, metrics.long_size),
            short: weighted(metrics.short_value, metrics.short_size),
        }
    }
}

/// One row of the trading-activity summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSummary {
    pub coin: String,
    pub current_price: f64,
    /// None when the snapshot lacks a current or previous-day price.
    pub price_change_pct: Option<f64>,
    /// Canonical open-position split, taken from the 24h window.
    pub open_long_pct: f64,
    pub open_short_pct: f64,
    pub entry: EntryPrices,
    windows: HashMap<WindowSize, WindowStats>,
}

impl AssetSummary {
    pub fn window(&self, window: WindowSize) -> WindowStats {
        self.windows.get(&window).copied().unwrap_or_default()
    }

    pub fn notional_24h(&self) -> f64 {
        self.window(WindowSize::Hour24).volume_usd
    }
}

/// Build one summary row per asset with 24h activity, sorted descending
/// by 24h notional volume. The sort is stable, so ties keep the order
/// coins were first encountered in the fill scan.
pub fn build_rows(buckets: &[WindowBucket], snapshot: &PriceSnapshot) -> Vec<AssetSummary> {
    // Windows nest, so the 24h bucket's coin set is the union across all
    // windows; it doubles as the "has activity" gate.
    let day = match buckets.iter().find(|b| b.window == WindowSize::Hour24) {
        Some(bucket) => bucket,
        None => return Vec::new(),
    };

    let mut rows = Vec::with_capacity(day.coin_count());
    for coin in day.coins_in_order() {
        let current_price = prices::resolve_price(snapshot, coin);
        let price_change_pct = prices::price_change_pct(snapshot, coin);

        let mut windows = HashMap::with_capacity(buckets.len());
        for bucket in buckets {
            // Notional applies the current spot to every window, not a
            // historical price as of the window's start.
            let stats = match bucket.get(coin) {
                Some(metrics) => {
                    let (long_pct, short_pct) = metrics.long_short_pct();
                    WindowStats {
                        volume_usd: metrics.volume * current_price,
                        long_pct,
                        short_pct,
                        traders: metrics.traders.len(),
                    }
                }
                None => WindowStats::default(),
            };
            windows.insert(bucket.window, stats);
        }

        let entry = match day.get(coin) {
            Some(metrics) => EntryPrices::from_accumulators(metrics),
            None => EntryPrices::default(),
        };

        let day_stats = windows
            .get(&WindowSize::Hour24)
            .copied()
            .unwrap_or_default();

        rows.push(AssetSummary {
            coin: coin.clone(),
            current_price,
            price_change_pct,
            open_long_pct: day_stats.long_pct,
            open_short_pct: day_stats.short_pct,
            entry,
            windows,
        });
    }

    rows.sort_by(|a, b| b.notional_24h().total_cmp(&a.notional_24h()));
    rows
}
