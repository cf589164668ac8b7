//! Reference price resolution with ordered fallbacks

use std::collections::HashMap;

/// Snapshot of current and previous-day prices per asset symbol.
/// Either map may be partial or empty; consumers fall back per symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSnapshot {
    pub current: HashMap<String, f64>,
    pub prev_day: HashMap<String, f64>,
}

/// Static fallback prices for well-known symbols, used when the live
/// snapshot has no entry.
pub fn default_price(coin: &str) -> Option<f64> {
    let price = match coin {
        "BTC" => 83_100.00,
        "ETH" => 4_450.00,
        "SOL" => 267.60,
        "AVAX" => 114.85,
        "HYPE" => 11.39,
        "XRP" => 0.52,
        "HBAR" => 0.09,
        "FARTCOIN" => 1.20,
        "MELANIA" => 0.39,
        "@107" => 0.09,
        _ => return None,
    };
    Some(price)
}

/// Resolve a reference price for a symbol: live snapshot first, then the
/// static table, then $1.00. The last resort is logged because every
/// notional derived from it is distorted.
pub fn resolve_price(snapshot: &PriceSnapshot, coin: &str) -> f64 {
    if let Some(price) = snapshot.current.get(coin) {
        return *price;
    }
    if let Some(price) = default_price(coin) {
        return price;
    }
    log::warn!("no price found for {}, using $1.00", coin);
    1.0
}

/// 24h percentage change. None when either side is unknown or the
/// previous-day price is zero; never NaN.
pub fn price_change_pct(snapshot: &PriceSnapshot, coin: &str) -> Option<f64> {
    let current = snapshot.current.get(coin)?;
    let previous = snapshot.prev_day.get(coin)?;
    if *previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(current: &[(&str, f64)], prev_day: &[(&str, f64)]) -> PriceSnapshot {
        PriceSnapshot {
            current: current.iter().map(|(c, p)| (c.to_string(), *p)).collect(),
            prev_day: prev_day.iter().map(|(c, p)| (c.to_string(), *p)).collect(),
        }
    }

    #[test]
    fn test_live_price_preferred() {
        let snap = snapshot(&[("BTC", 51000.0)], &[]);
        assert_eq!(resolve_price(&snap, "BTC"), 51000.0);
    }

    #[test]
    fn test_static_table_fallback() {
        let snap = PriceSnapshot::default();
        assert_eq!(resolve_price(&snap, "BTC"), 83_100.00);
        assert_eq!(resolve_price(&snap, "@107"), 0.09);
    }

    #[test]
    fn test_dollar_fallback_for_unknown_symbol() {
        let snap = PriceSnapshot::default();
        assert_eq!(resolve_price(&snap, "SOMENEWCOIN"), 1.0);
    }

    #[test]
    fn test_price_change() {
        let snap = snapshot(&[("BTC", 110.0)], &[("BTC", 100.0)]);
        assert_eq!(price_change_pct(&snap, "BTC"), Some(10.0));

        let snap = snapshot(&[("BTC", 90.0)], &[("BTC", 100.0)]);
        assert_eq!(price_change_pct(&snap, "BTC"), Some(-10.0));
    }

    #[test]
    fn test_price_change_missing_or_zero_previous() {
        let snap = snapshot(&[("BTC", 110.0)], &[]);
        assert_eq!(price_change_pct(&snap, "BTC"), None);

        let snap = snapshot(&[], &[("BTC", 100.0)]);
        assert_eq!(price_change_pct(&snap, "BTC"), None);

        let snap = snapshot(&[("BTC", 110.0)], &[("BTC", 0.0)]);
        assert_eq!(price_change_pct(&snap, "BTC"), None);
    }
}
