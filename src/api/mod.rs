pub mod binance;
pub mod error;
pub mod types;

pub use binance::BinanceFuturesClient;
pub use error::VenueError;
pub use types::*;

use async_trait::async_trait;

/// Abstraction over the venue connection. `BinanceFuturesClient` implements
/// this for the real exchange; tests substitute a mock or recording venue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FuturesVenue: Send + Sync {
    /// Submit one order and return the venue's acknowledgement.
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResult, VenueError>;

    /// Fetch the full futures exchange metadata.
    async fn exchange_info(&self) -> Result<ExchangeInfo, VenueError>;
}
