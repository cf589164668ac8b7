use std::env;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub addresses: Vec<String>,
    pub request_timeout_secs: u64,
    pub rust_log: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing environment variable: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// TRADER_ADDRESSES (comma-separated wallet addresses) is required;
    /// everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("HL_API_URL")
            .unwrap_or_else(|_| crate::sources::hyperliquid::MAINNET_INFO_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "HL_API_URL must start with http:// or https://".to_string(),
            ));
        }

        let raw_addresses = env::var("TRADER_ADDRESSES")
            .map_err(|_| ConfigError::MissingVariable("TRADER_ADDRESSES".to_string()))?;

        let addresses: Vec<String> = raw_addresses
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if addresses.is_empty() {
            return Err(ConfigError::InvalidValue(
                "TRADER_ADDRESSES contains no addresses".to_string(),
            ));
        }

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .unwrap_or(10);

        let rust_log = env::var("RUST_LOG").ok();

        Ok(Self {
            api_url,
            addresses,
            request_timeout_secs,
            rust_log,
        })
    }
}
