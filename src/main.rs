
pub mod analyzer_core;
mod config;
pub mod sources;

use {
    analyzer_core::{aggregate, AssetSummary, WindowSize},
    chrono::Utc,
    config::Config,
    sources::HyperliquidClient,
    std::time::Duration,
};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    // Logs go to stderr so the summary table stays clean on stdout
    let mut builder = if config.rust_log.is_some() {
        env_logger::Builder::from_default_env()
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    };
    builder.target(env_logger::Target::Stderr).init();

    log::info!("🚀 Starting trader activity analysis");
    log::info!("   API: {}", config.api_url);
    log::info!("   Addresses: {}", config.addresses.len());
    log::info!("   Request timeout: {}s", config.request_timeout_secs);

    let client = HyperliquidClient::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let now_ms = Utc::now().timestamp_millis();
    let rows = aggregate(&config.addresses, now_ms, &client, &client).await;

    log::info!("✅ Found activity for {} assets", rows.len());
    print_summary_table(&rows);

    Ok(())
}

fn format_opt_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => "N/A".to_string(),
    }
}

fn print_summary_table(rows: &[AssetSummary]) {
    if rows.is_empty() {
        println!("No trading activity in the last 24h.");
        return;
    }

    println!(
        "{:<10} {:>12} {:>8} {:>14} {:>9} {:>8} {:>12} {:>12} {:>12}",
        "Asset", "Price", "Chg%", "24h Volume", "L/S", "Traders", "Entry All", "Entry L", "Entry S"
    );
    for row in rows {
        let day = row.window(WindowSize::Hour24);
        println!(
            "{:<10} {:>12.2} {:>8} {:>14.0} {:>4.0}/{:<4.0} {:>8} {:>12} {:>12} {:>12}",
            row.coin,
            row.current_price,
            row.price_change_pct
                .map(|c| format!("{:+.1}", c))
                .unwrap_or_else(|| "-".to_string()),
            day.volume_usd,
            row.open_long_pct,
            row.open_short_pct,
            day.traders,
            format_opt_price(row.entry.combined),
            format_opt_price(row.entry.long),
            format_opt_price(row.entry.short),
        );
    }

    println!();
    println!("Per-window notional volume (traders):");
    for row in rows {
        let cells: Vec<String> = WindowSize::all()
            .iter()
            .map(|w| {
                let stats = row.window(*w);
                format!("{}: {:.0} ({})", w.as_str(), stats.volume_usd, stats.traders)
            })
            .collect();
        println!("{:<10} {}", row.coin, cells.join("  "));
    }
}
