use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::VenueError;
use super::types::*;
use super::FuturesVenue;
use crate::core::config::BinanceConfig;

type HmacSha256 = Hmac<Sha256>;

/// Signed REST client for Binance USDⓈ-M futures. The base URL (testnet or
/// live) comes from config; construction makes no network call.
pub struct BinanceFuturesClient {
    http: Client,
    config: BinanceConfig,
}

impl BinanceFuturesClient {
    pub fn new(config: BinanceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// HMAC-SHA256 over the full query string, hex-encoded per the Binance
    /// signed-endpoint scheme.
    fn sign(&self, query: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.config.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(query.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn timestamp_ms() -> Result<u64, VenueError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .map_err(|e| VenueError::Unexpected(format!("system clock before epoch: {}", e)))
    }

    async fn signed_post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T, VenueError> {
        params.push(("recvWindow", self.config.recv_window_ms.to_string()));
        params.push(("timestamp", Self::timestamp_ms()?.to_string()));

        let query = encode_query(&params);
        let signature = self.sign(&query);
        let url = format!(
            "{}{}?{}&signature={}",
            self.config.base_url, endpoint, query, signature
        );

        let response = self
            .http
            .post(&url)
            .header("X-MBX-APIKEY", &self.config.api_key)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn public_get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, VenueError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// Venue error bodies parse as `{code, msg}` regardless of HTTP status,
    /// so that check runs first.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, VenueError> {
        let status = response.status();
        let text = response.text().await?;

        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
            if body.code < 0 {
                return Err(VenueError::from_api_code(body.code, body.msg));
            }
        }

        if !status.is_success() {
            return Err(VenueError::Unexpected(format!("HTTP {}: {}", status, text)));
        }

        serde_json::from_str(&text)
            .map_err(|e| VenueError::Unexpected(format!("failed to decode venue response: {}", e)))
    }
}

#[async_trait]
impl FuturesVenue for BinanceFuturesClient {
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResult, VenueError> {
        tracing::debug!(
            "POST /fapi/v1/order {} {} {}",
            request.type_name(),
            request.side(),
            request.symbol()
        );
        self.signed_post("/fapi/v1/order", request.to_params()).await
    }

    async fn exchange_info(&self) -> Result<ExchangeInfo, VenueError> {
        self.public_get("/fapi/v1/exchangeInfo").await
    }
}

fn encode_query(params: &[(&'static str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> BinanceConfig {
        BinanceConfig {
            api_key: "test-key".to_string(),
            api_secret: secret.to_string(),
            testnet: true,
            base_url: "https://testnet.binancefuture.com".to_string(),
            recv_window_ms: 5000,
        }
    }

    #[test]
    fn signature_matches_exchange_documented_vector() {
        // Example request from the Binance signed-endpoint documentation.
        let client = BinanceFuturesClient::new(test_config(
            "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j",
        ));
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        assert_eq!(
            client.sign(query),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn query_encoding_preserves_parameter_order() {
        let params = vec![
            ("symbol", "BTCUSDT".to_string()),
            ("side", "BUY".to_string()),
            ("quantity", "0.001".to_string()),
        ];
        assert_eq!(encode_query(&params), "symbol=BTCUSDT&side=BUY&quantity=0.001");
    }
}
