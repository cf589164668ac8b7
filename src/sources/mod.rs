//! Exchange data collaborators feeding the analyzer
//!
//! The engine consumes these traits; the production implementation is
//! [`HyperliquidClient`]. Any failure is recoverable by design: callers
//! treat an `Err` as an empty result and continue.

pub mod hyperliquid;

pub use hyperliquid::HyperliquidClient;

use crate::analyzer_core::{Fill, PriceSnapshot};
use async_trait::async_trait;

#[derive(Debug)]
pub enum SourceError {
    Http(reqwest::Error),
    Status(u16),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Http(e) => write!(f, "http error: {}", e),
            SourceError::Status(code) => write!(f, "unexpected status code: {}", code),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Http(e)
    }
}

/// Provider of current and previous-day reference prices.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Partial or empty maps are valid results; the consumer falls back
    /// per symbol.
    async fn snapshot(&self) -> Result<PriceSnapshot, SourceError>;
}

/// Provider of trade fills for a single wallet address.
#[async_trait]
pub trait FillSource: Send + Sync {
    /// Fills for one address. Implementations stamp each returned fill
    /// with the queried address; the engine does not re-derive it.
    async fn user_fills(&self, address: &str) -> Result<Vec<Fill>, SourceError>;
}
