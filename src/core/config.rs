use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub binance: BinanceConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinanceConfig {
    pub api_key: String,
    pub api_secret: String,
    pub testnet: bool,
    pub base_url: String,
    pub recv_window_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let testnet = env::var("BINANCE_TESTNET")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Config {
            binance: BinanceConfig {
                // Operator-editable placeholders when no .env is present.
                api_key: env::var("BINANCE_API_KEY")
                    .unwrap_or_else(|_| "paste-api-key-here".to_string()),
                api_secret: env::var("BINANCE_API_SECRET")
                    .unwrap_or_else(|_| "paste-api-secret-here".to_string()),
                testnet,
                base_url: if testnet {
                    "https://testnet.binancefuture.com".to_string()
                } else {
                    "https://fapi.binance.com".to_string()
                },
                recv_window_ms: env::var("BINANCE_RECV_WINDOW_MS")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .unwrap_or(5000),
            },
            monitoring: MonitoringConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_file: env::var("LOG_FILE").unwrap_or_else(|_| "bot_log.log".to_string()),
            },
        })
    }
}
