use thiserror::Error;

/// Everything that can go wrong between building an order and the venue's
/// answer. Callers match on the variant instead of parsing log text.
#[derive(Debug, Error)]
pub enum VenueError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Binance API error (code {code}): {message}")]
    Api { code: i64, message: String },

    #[error("order rejected (code {code}): {message}")]
    OrderRejected { code: i64, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl VenueError {
    /// Classifies a venue error body. -2010/-2011 are order-semantics
    /// rejections (NEW_ORDER_REJECTED / CANCEL_REJECTED); everything else is
    /// a generic API error.
    pub fn from_api_code(code: i64, message: String) -> Self {
        match code {
            -2010 | -2011 => VenueError::OrderRejected { code, message },
            _ => VenueError::Api { code, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_failure_classifies_as_api_error() {
        let err = VenueError::from_api_code(-1013, "Filter failure".to_string());
        assert!(matches!(err, VenueError::Api { code: -1013, .. }));
        assert_eq!(
            err.to_string(),
            "Binance API error (code -1013): Filter failure"
        );
    }

    #[test]
    fn new_order_rejected_classifies_as_rejection() {
        let err = VenueError::from_api_code(-2010, "Order would immediately trigger".to_string());
        assert!(matches!(err, VenueError::OrderRejected { code: -2010, .. }));
    }
}
