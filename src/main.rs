use anyhow::Result;
use std::io;
use std::sync::Arc;

use binance_futures_bot::api::BinanceFuturesClient;
use binance_futures_bot::cli::InteractiveShell;
use binance_futures_bot::core::{logging, Config};
use binance_futures_bot::trading::OrderClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Guard must outlive the shell or buffered file log lines are dropped.
    let _guard = logging::init_logging(&config.monitoring.log_level, &config.monitoring.log_file);

    tracing::info!("🚀 Binance Futures Order Bot starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Endpoint: {}", config.binance.base_url);

    let venue = Arc::new(BinanceFuturesClient::new(config.binance.clone()));
    let client = OrderClient::new(venue, config.binance.testnet);

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut shell = InteractiveShell::new(client, stdin, stdout);
    shell.run().await?;

    Ok(())
}
