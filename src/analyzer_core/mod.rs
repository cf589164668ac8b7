//! Analyzer Core - Trader Activity Aggregation Engine
//!
//! Turns a flat collection of trade fills, fetched per wallet address,
//! into one summary row per traded asset across five trailing windows
//! (1h, 3h, 6h, 12h, 24h).
//!
//! # Architecture
//!
//! ```text
//! FillSource (one call per address) ──┐
//!                                     ├─> flat Fill collection
//! PriceSource (single snapshot) ──────┘         │
//!                                               ▼
//!                    WindowBucket × 5 (independent rescans)
//!                                               │
//!                                               ▼
//!              AssetSummary rows (sorted by 24h notional volume)
//! ```
//!
//! The engine itself performs no network or file I/O; collaborators are
//! passed in explicitly, which keeps `summarize` a pure function over
//! already-fetched data.

pub mod engine;
pub mod fill;
pub mod prices;
pub mod summary;
pub mod window;

pub use engine::{aggregate, summarize};
pub use fill::{Fill, PositionSide, RawFill};
pub use prices::{default_price, price_change_pct, resolve_price, PriceSnapshot};
pub use summary::{build_rows, AssetSummary, EntryPrices, WindowStats};
pub use window::{CoinMetrics, WindowBucket, WindowSize};
