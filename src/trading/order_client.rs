use std::sync::Arc;

use crate::api::{FuturesVenue, OrderRequest, OrderResult, OrderSide, SymbolInfo, VenueError};

/// Validates operator input, builds one `OrderRequest` per call, and
/// delegates to the venue. Stateless beyond the held connection and mode:
/// one request in, at most one venue call and one result out.
pub struct OrderClient {
    venue: Arc<dyn FuturesVenue>,
}

impl OrderClient {
    pub fn new(venue: Arc<dyn FuturesVenue>, testnet: bool) -> Self {
        if testnet {
            tracing::info!("✅ Bot initialised in testnet mode");
        } else {
            tracing::warn!("⚠️  Bot initialised in LIVE mode - real orders will be placed!");
        }
        Self { venue }
    }

    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: f64,
    ) -> Result<OrderResult, VenueError> {
        let side = parse_side(side)?;
        check_positive("quantity", quantity)?;

        self.submit(OrderRequest::Market {
            symbol: symbol.to_uppercase(),
            side,
            quantity,
        })
        .await
    }

    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: f64,
        price: f64,
    ) -> Result<OrderResult, VenueError> {
        let side = parse_side(side)?;
        check_positive("quantity", quantity)?;
        check_positive("price", price)?;

        self.submit(OrderRequest::Limit {
            symbol: symbol.to_uppercase(),
            side,
            quantity,
            price,
        })
        .await
    }

    /// Single submission boundary: exactly one venue call, every failure
    /// class logged here before the error goes back to the caller.
    async fn submit(&self, request: OrderRequest) -> Result<OrderResult, VenueError> {
        tracing::info!(
            "🎯 Placing {} {} order: {} qty {}",
            request.type_name(),
            request.side(),
            request.symbol(),
            request.quantity()
        );

        match self.venue.create_order(&request).await {
            Ok(order) => {
                tracing::info!(
                    "Order successful: symbol={}, status={}, order_id={}",
                    order.symbol,
                    order.status,
                    order.order_id
                );
                Ok(order)
            }
            Err(err) => {
                match &err {
                    VenueError::Api { code, message } => {
                        tracing::error!("Binance API error (code {}): {}", code, message);
                    }
                    VenueError::OrderRejected { code, message } => {
                        tracing::error!("Order rejected (code {}): {}", code, message);
                    }
                    VenueError::Transport(e) => {
                        tracing::error!("Transport error during order submission: {}", e);
                    }
                    other => {
                        tracing::error!("Unexpected error during order submission: {}", other);
                    }
                }
                Err(err)
            }
        }
    }

    /// Looks one symbol up in the venue's exchange metadata. `Ok(None)` means
    /// the venue does not list it.
    pub async fn get_symbol_info(&self, symbol: &str) -> Result<Option<SymbolInfo>, VenueError> {
        let wanted = symbol.to_uppercase();
        let info = self.venue.exchange_info().await.map_err(|err| {
            tracing::error!("Failed to fetch exchange info: {}", err);
            err
        })?;

        match info
            .symbols
            .into_iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(&wanted))
        {
            Some(found) => Ok(Some(found)),
            None => {
                tracing::warn!("{} is not a valid futures symbol", wanted);
                Ok(None)
            }
        }
    }
}

fn parse_side(side: &str) -> Result<OrderSide, VenueError> {
    OrderSide::parse(side).ok_or_else(|| {
        let message = format!("side must be either BUY or SELL, got {:?}", side);
        tracing::error!("{}", message);
        VenueError::InvalidArgument(message)
    })
}

fn check_positive(name: &str, value: f64) -> Result<(), VenueError> {
    if value > 0.0 {
        Ok(())
    } else {
        let message = format!("{} must be positive, got {}", name, value);
        tracing::error!("{}", message);
        Err(VenueError::InvalidArgument(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExchangeInfo, MockFuturesVenue, OrderResult};

    fn sample_result() -> OrderResult {
        OrderResult {
            order_id: 4001882,
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            order_type: "MARKET".to_string(),
            status: "NEW".to_string(),
            orig_qty: "0.001".to_string(),
            price: "0".to_string(),
            time_in_force: None,
        }
    }

    fn sample_symbol(symbol: &str) -> SymbolInfo {
        SymbolInfo {
            symbol: symbol.to_string(),
            status: "TRADING".to_string(),
            base_asset: "BTC".to_string(),
            quote_asset: "USDT".to_string(),
            price_precision: 2,
            quantity_precision: 3,
        }
    }

    #[tokio::test]
    async fn rejects_invalid_side_without_calling_venue() {
        // No expectations set: any venue call panics the test.
        let venue = MockFuturesVenue::new();
        let client = OrderClient::new(Arc::new(venue), true);

        let err = client
            .place_market_order("BTCUSDT", "HOLD", 0.001)
            .await
            .unwrap_err();
        assert!(matches!(err, VenueError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn rejects_non_positive_limit_price_without_calling_venue() {
        let venue = MockFuturesVenue::new();
        let client = OrderClient::new(Arc::new(venue), true);

        let err = client
            .place_limit_order("BTCUSDT", "buy", 0.001, 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, VenueError::InvalidArgument(_)));

        let err = client
            .place_limit_order("BTCUSDT", "buy", -1.0, 60000.0)
            .await
            .unwrap_err();
        assert!(matches!(err, VenueError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn normalizes_symbol_and_side_before_the_wire() {
        let mut venue = MockFuturesVenue::new();
        venue
            .expect_create_order()
            .withf(|request| {
                matches!(
                    request,
                    OrderRequest::Market { symbol, side, quantity }
                        if symbol == "BTCUSDT"
                            && *side == OrderSide::Buy
                            && *quantity == 0.001
                )
            })
            .times(1)
            .returning(|_| Ok(sample_result()));
        let client = OrderClient::new(Arc::new(venue), true);

        let order = client
            .place_market_order("btcusdt", "buy", 0.001)
            .await
            .unwrap();
        assert_eq!(order.order_id, 4001882);
    }

    #[tokio::test]
    async fn limit_order_reaches_venue_with_price_and_gtc() {
        let mut venue = MockFuturesVenue::new();
        venue
            .expect_create_order()
            .withf(|request| {
                request
                    .to_params()
                    .contains(&("timeInForce", "GTC".to_string()))
                    && matches!(
                        request,
                        OrderRequest::Limit { symbol, side, quantity, price }
                            if symbol == "ETHUSDT"
                                && *side == OrderSide::Sell
                                && *quantity == 0.5
                                && *price == 3000.0
                    )
            })
            .times(1)
            .returning(|_| Ok(sample_result()));
        let client = OrderClient::new(Arc::new(venue), true);

        client
            .place_limit_order("ethusdt", "sell", 0.5, 3000.0)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn venue_api_error_surfaces_with_code_and_message() {
        let mut venue = MockFuturesVenue::new();
        venue.expect_create_order().times(1).returning(|_| {
            Err(VenueError::from_api_code(-1013, "Filter failure".to_string()))
        });
        let client = OrderClient::new(Arc::new(venue), true);

        let err = client
            .place_market_order("BTCUSDT", "SELL", 0.001)
            .await
            .unwrap_err();
        match err {
            VenueError::Api { code, message } => {
                assert_eq!(code, -1013);
                assert_eq!(message, "Filter failure");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn symbol_lookup_matches_on_the_symbol_field() {
        let mut venue = MockFuturesVenue::new();
        venue.expect_exchange_info().times(1).returning(|| {
            Ok(ExchangeInfo {
                symbols: vec![sample_symbol("BTCUSDT"), sample_symbol("ETHUSDT")],
            })
        });
        let client = OrderClient::new(Arc::new(venue), true);

        let found = client.get_symbol_info("ethusdt").await.unwrap();
        assert_eq!(found.unwrap().symbol, "ETHUSDT");
    }

    #[tokio::test]
    async fn symbol_lookup_returns_none_for_unknown_symbol() {
        let mut venue = MockFuturesVenue::new();
        venue.expect_exchange_info().times(1).returning(|| {
            Ok(ExchangeInfo {
                symbols: vec![sample_symbol("BTCUSDT")],
            })
        });
        let client = OrderClient::new(Arc::new(venue), true);

        let found = client.get_symbol_info("DOGEUSDT").await.unwrap();
        assert!(found.is_none());
    }
}
