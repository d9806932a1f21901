//! Unified error types.

use crate::domain::order::{OrderAction, OrderStatus};
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No order has been loaded")]
    OrderNotLoaded,

    #[error("Cannot {action} order while it is {status}")]
    ActionNotAllowed {
        action: OrderAction,
        status: OrderStatus,
    },
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_not_allowed_message() {
        let err = ReviewError::ActionNotAllowed {
            action: OrderAction::Reject,
            status: OrderStatus::Accepted,
        };
        assert_eq!(err.to_string(), "Cannot reject order while it is accepted");
    }

    #[test]
    fn test_http_error_wraps_into_review_error() {
        let err: ReviewError = HttpError::NotFound("order 9".into()).into();
        assert!(matches!(err, ReviewError::Http(HttpError::NotFound(_))));
        assert_eq!(err.to_string(), "HTTP error: Not found: order 9");
    }
}
