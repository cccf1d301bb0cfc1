use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Case-insensitive parse; anything other than BUY/SELL is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_uppercase().as_str() {
            "BUY" => Some(OrderSide::Buy),
            "SELL" => Some(OrderSide::Sell),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-formed order. The variant decides the wire parameter set, so a
/// limit order without a price is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRequest {
    Market {
        symbol: String,
        side: OrderSide,
        quantity: f64,
    },
    Limit {
        symbol: String,
        side: OrderSide,
        quantity: f64,
        price: f64,
    },
}

impl OrderRequest {
    pub fn symbol(&self) -> &str {
        match self {
            OrderRequest::Market { symbol, .. } | OrderRequest::Limit { symbol, .. } => symbol,
        }
    }

    pub fn side(&self) -> OrderSide {
        match self {
            OrderRequest::Market { side, .. } | OrderRequest::Limit { side, .. } => *side,
        }
    }

    pub fn quantity(&self) -> f64 {
        match self {
            OrderRequest::Market { quantity, .. } | OrderRequest::Limit { quantity, .. } => {
                *quantity
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            OrderRequest::Market { .. } => "MARKET",
            OrderRequest::Limit { .. } => "LIMIT",
        }
    }

    /// Wire parameters for `POST /fapi/v1/order`, in the order Binance
    /// documents them. Limit orders always carry GTC time-in-force.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        match self {
            OrderRequest::Market {
                symbol,
                side,
                quantity,
            } => vec![
                ("symbol", symbol.clone()),
                ("side", side.as_str().to_string()),
                ("type", "MARKET".to_string()),
                ("quantity", quantity.to_string()),
            ],
            OrderRequest::Limit {
                symbol,
                side,
                quantity,
                price,
            } => vec![
                ("symbol", symbol.clone()),
                ("side", side.as_str().to_string()),
                ("type", "LIMIT".to_string()),
                ("timeInForce", "GTC".to_string()),
                ("quantity", quantity.to_string()),
                ("price", price.to_string()),
            ],
        }
    }
}

/// Venue acknowledgement for a placed order. Quantities and prices come back
/// as strings on the Binance wire; they are kept as-is for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: u64,
    pub symbol: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub status: String,
    pub orig_qty: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub time_in_force: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub price_precision: u32,
    pub quantity_precision: u32,
}

/// Error body Binance returns for rejected requests, e.g.
/// `{"code": -1013, "msg": "Filter failure: PRICE_FILTER"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}
