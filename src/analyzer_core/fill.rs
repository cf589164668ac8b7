//! Fill records and direction classification

use serde::{Deserialize, Serialize};

/// Side of a position-opening fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSide {
    Long,
    Short,
}

/// Raw fill as returned by the userFills endpoint. Numeric fields arrive
/// as strings and are parsed when converting into a [`Fill`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFill {
    #[serde(default)]
    pub coin: String,
    #[serde(default)]
    pub px: String,
    #[serde(default)]
    pub sz: String,
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub time: i64,
}

/// One executed trade for a single trader on one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub coin: String,
    /// Absolute traded size in asset units.
    pub size: f64,
    pub price: f64,
    /// Free-form direction tag from the exchange ("Open Long",
    /// "Close Short", "Buy", ...). Classified by substring only.
    pub direction: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub trader: Option<String>,
}

impl Fill {
    /// Convert a raw fill, stamping it with the address it was fetched
    /// for. Returns None when size or price fail to parse; such fills
    /// are dropped rather than defaulted.
    pub fn from_raw(raw: &RawFill, trader: &str) -> Option<Self> {
        let size = raw.sz.parse::<f64>().ok()?;
        let price = raw.px.parse::<f64>().ok()?;

        Some(Self {
            coin: raw.coin.clone(),
            size: size.abs(),
            price,
            direction: raw.dir.clone(),
            timestamp: raw.time,
            trader: if trader.is_empty() {
                None
            } else {
                Some(trader.to_string())
            },
        })
    }

    /// Whether this fill opens position size. Substring match, not exact:
    /// unrecognized tags silently classify as non-opening.
    pub fn is_open(&self) -> bool {
        self.direction.contains("Open")
    }

    /// Long/short classification of the direction tag. "Long" wins when a
    /// tag somehow contains both. None for tags matching neither side.
    pub fn side(&self) -> Option<PositionSide> {
        if self.direction.contains("Long") {
            Some(PositionSide::Long)
        } else if self.direction.contains("Short") {
            Some(PositionSide::Short)
        } else {
            None
        }
    }
}
