//! Single-shot aggregation over fetched fills

use super::fill::Fill;
use super::prices::PriceSnapshot;
use super::summary::{self, AssetSummary};
use super::window::{WindowBucket, WindowSize};
use crate::sources::{FillSource, PriceSource};

/// Pure summarization pass: flat fill collection plus price snapshot in,
/// summary rows out. No I/O; deterministic for identical inputs.
pub fn summarize(fills: &[Fill], snapshot: &PriceSnapshot, now_ms: i64) -> Vec<AssetSummary> {
    let buckets: Vec<WindowBucket> = WindowSize::all()
        .iter()
        .map(|window| WindowBucket::build(*window, now_ms, fills))
        .collect();

    summary::build_rows(&buckets, snapshot)
}

/// Fetch fills for every address, concatenate them into one flat
/// collection, and summarize. A failed price fetch degrades to an empty
/// snapshot and a failed address to an empty fill list; neither aborts
/// the run. Duplicate fills across addresses are not deduplicated: each
/// counts once per source query.
pub async fn aggregate(
    addresses: &[String],
    now_ms: i64,
    price_source: &dyn PriceSource,
    fill_source: &dyn FillSource,
) -> Vec<AssetSummary> {
    let snapshot = match price_source.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("price snapshot unavailable, using fallbacks: {}", e);
            PriceSnapshot::default()
        }
    };

    let mut all_fills: Vec<Fill> = Vec::new();
    for (i, address) in addresses.iter().enumerate() {
        match fill_source.user_fills(address).await {
            Ok(fills) => {
                log::debug!(
                    "address {}/{}: {} fills for {}",
                    i + 1,
                    addresses.len(),
                    fills.len(),
                    address
                );
                all_fills.extend(fills);
            }
            Err(e) => {
                log::warn!("skipping address {}: {}", address, e);
            }
        }
    }

    log::info!(
        "aggregating {} fills from {} addresses",
        all_fills.len(),
        addresses.len()
    );

    summarize(&all_fills, &snapshot, now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const HOUR_MS: i64 = 60 * 60 * 1000;
    const MIN_MS: i64 = 60 * 1000;

    fn fill(coin: &str, size: f64, price: f64, dir: &str, timestamp: i64) -> Fill {
        Fill {
            coin: coin.to_string(),
            size,
            price,
            direction: dir.to_string(),
            timestamp,
            trader: Some("0xac50".to_string()),
        }
    }

    fn btc_snapshot(price: f64) -> PriceSnapshot {
        PriceSnapshot {
            current: HashMap::from([("BTC".to_string(), price)]),
            prev_day: HashMap::new(),
        }
    }

    /// One address, two BTC fills: an Open Long 30 minutes ago and an
    /// Open Short two hours ago, with spot at 51000.
    #[test]
    fn test_two_fill_btc_scenario() {
        let now = 1_000_000 * HOUR_MS;
        let fills = vec![
            fill("BTC", 2.0, 50000.0, "Open Long", now - 30 * MIN_MS),
            fill("BTC", 1.0, 52000.0, "Open Short", now - 2 * HOUR_MS),
        ];

        let rows = summarize(&fills, &btc_snapshot(51000.0), now);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];

        // 1h window sees only the long
        let h1 = row.window(WindowSize::Hour1);
        assert_eq!(h1.volume_usd, 102_000.0);
        assert_eq!(h1.long_pct, 100.0);
        assert_eq!(h1.short_pct, 0.0);
        assert_eq!(h1.traders, 1);

        // 24h window sees both
        let h24 = row.window(WindowSize::Hour24);
        assert_eq!(h24.volume_usd, 153_000.0);
        assert!((h24.long_pct - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(h24.long_pct + h24.short_pct, 100.0);

        assert_eq!(row.entry.long, Some(50000.0));
        assert_eq!(row.entry.short, Some(52000.0));
        assert!((row.entry.combined.unwrap() - 152_000.0 / 3.0).abs() < 1e-9);

        assert_eq!(row.open_long_pct, h24.long_pct);
        assert_eq!(row.open_short_pct, h24.short_pct);
    }

    #[test]
    fn test_missing_coin_dropped_without_error() {
        let now = 1_000_000 * HOUR_MS;
        let fills = vec![
            fill("", 5.0, 100.0, "Open Long", now - MIN_MS),
            fill("BTC", 1.0, 50000.0, "Open Long", now - MIN_MS),
        ];

        let rows = summarize(&fills, &btc_snapshot(50000.0), now);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].coin, "BTC");
        assert_eq!(rows[0].window(WindowSize::Hour24).volume_usd, 50000.0);
    }

    #[test]
    fn test_empty_snapshot_falls_back() {
        let now = 1_000_000 * HOUR_MS;
        let fills = vec![
            fill("BTC", 1.0, 50000.0, "Open Long", now - MIN_MS),
            fill("SOMENEWCOIN", 3.0, 2.0, "Open Long", now - MIN_MS),
        ];

        let rows = summarize(&fills, &PriceSnapshot::default(), now);
        assert_eq!(rows.len(), 2);

        let btc = rows.iter().find(|r| r.coin == "BTC").unwrap();
        assert_eq!(btc.current_price, 83_100.00); // static table
        assert_eq!(btc.price_change_pct, None);

        let unknown = rows.iter().find(|r| r.coin == "SOMENEWCOIN").unwrap();
        assert_eq!(unknown.current_price, 1.0); // $1 fallback
        assert_eq!(unknown.window(WindowSize::Hour24).volume_usd, 3.0);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let now = 1_000_000 * HOUR_MS;
        let fills = vec![
            fill("ETH", 4.0, 4000.0, "Open Short", now - MIN_MS),
            fill("BTC", 2.0, 50000.0, "Open Long", now - 30 * MIN_MS),
            fill("SOL", 10.0, 250.0, "Close Long", now - 5 * HOUR_MS),
        ];
        let snapshot = btc_snapshot(51000.0);

        let first = summarize(&fills, &snapshot, now);
        let second = summarize(&fills, &snapshot, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_fills_yields_no_rows() {
        let rows = summarize(&[], &PriceSnapshot::default(), 1_000_000 * HOUR_MS);
        assert!(rows.is_empty());
    }
}
