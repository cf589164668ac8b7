//! Trailing time window bucketing for fill metrics

use super::fill::{Fill, PositionSide};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowSize {
    Hour1,
    Hour3,
    Hour6,
    Hour12,
    Hour24,
}

impl WindowSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowSize::Hour1 => "1h",
            WindowSize::Hour3 => "3h",
            WindowSize::Hour6 => "6h",
            WindowSize::Hour12 => "12h",
            WindowSize::Hour24 => "24h",
        }
    }

    pub fn duration_ms(&self) -> i64 {
        let hours = match self {
            WindowSize::Hour1 => 1,
            WindowSize::Hour3 => 3,
            WindowSize::Hour6 => 6,
            WindowSize::Hour12 => 12,
            WindowSize::Hour24 => 24,
        };
        hours * 60 * 60 * 1000
    }

    /// Inclusive lower bound for fills belonging to this window.
    pub fn cutoff(&self, now_ms: i64) -> i64 {
        now_ms - self.duration_ms()
    }

    pub fn all() -> [WindowSize; 5] {
        [
            WindowSize::Hour1,
            WindowSize::Hour3,
            WindowSize::Hour6,
            WindowSize::Hour12,
            WindowSize::Hour24,
        ]
    }
}

/// Per-asset accumulators for one window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinMetrics {
    /// Sum of absolute fill sizes, all directions.
    pub volume: f64,
    /// Opening fill sizes split by side. Closing fills and fills with an
    /// unrecognized side never touch these.
    pub open_long: f64,
    pub open_short: f64,
    pub traders: HashSet<String>,
    /// Weighted entry-price accumulators: sum of size*price and sum of
    /// size, per side, over opening fills only.
    pub long_value: f64,
    pub long_size: f64,
    pub short_value: f64,
    pub short_size: f64,
}

impl CoinMetrics {
    pub fn add_fill(&mut self, fill: &Fill) {
        if let Some(trader) = &fill.trader {
            self.traders.insert(trader.clone());
        }

        self.volume += fill.size;

        if !fill.is_open() {
            return;
        }
        match fill.side() {
            Some(PositionSide::Long) => {
                self.open_long += fill.size;
                self.long_value += fill.size * fill.price;
                self.long_size += fill.size;
            }
            Some(PositionSide::Short) => {
                self.open_short += fill.size;
                self.short_value += fill.size * fill.price;
                self.short_size += fill.size;
            }
            // opening tag with no recognizable side: volume only
            None => {}
        }
    }

    /// Long percentage of open size, with short as its exact complement
    /// so the two always sum to 100. Both 0 when there is no open size.
    pub fn long_short_pct(&self) -> (f64, f64) {
        let total = self.open_long + self.open_short;
        if total > 0.0 {
            let long_pct = self.open_long / total * 100.0;
            (long_pct, 100.0 - long_pct)
        } else {
            (0.0, 0.0)
        }
    }
}

/// One trailing window's view over the flat fill collection.
#[derive(Debug, Clone)]
pub struct WindowBucket {
    pub window: WindowSize,
    pub cutoff: i64,
    coins: HashMap<String, CoinMetrics>,
    /// Coins in first-seen order, so output order is deterministic.
    order: Vec<String>,
}

impl WindowBucket {
    /// Scan the full flat collection. Each window rescans independently
    /// rather than deriving from a narrower window, keeping every
    /// window's aggregates self-contained.
    pub fn build(window: WindowSize, now_ms: i64, fills: &[Fill]) -> Self {
        let cutoff = window.cutoff(now_ms);
        let mut coins: HashMap<String, CoinMetrics> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for fill in fills {
            if fill.timestamp < cutoff {
                continue;
            }
            if fill.coin.is_empty() {
                continue;
            }

            let metrics = match coins.entry(fill.coin.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    order.push(fill.coin.clone());
                    entry.insert(CoinMetrics::default())
                }
            };
            metrics.add_fill(fill);
        }

        Self {
            window,
            cutoff,
            coins,
            order,
        }
    }

    pub fn get(&self, coin: &str) -> Option<&CoinMetrics> {
        self.coins.get(coin)
    }

    /// Coins with activity in this window, in first-seen order.
    pub fn coins_in_order(&self) -> &[String] {
        &self.order
    }

    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }
}
