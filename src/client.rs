//! High-level client: `MarketplaceClient` with nested sub-client accessors.
//!
//! The order sub-client lives in `domain/order/client.rs`. This module keeps
//! the builder, the accessor, and the [`OrderApi`] implementation the review
//! session runs against.

use crate::domain::order::client::Orders;
use crate::domain::order::{OrderApi, OrderInfo, OrderResponse};
use crate::error::ReviewError;
use crate::http::{MarketplaceHttp, RetryPolicy};
use crate::shared::OrderId;

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for talking to the marketplace.
#[derive(Clone)]
pub struct MarketplaceClient {
    pub(crate) http: MarketplaceHttp,
    /// Retry policy for order reads. Accept/decline never retry.
    pub(crate) fetch_retry: RetryPolicy,
}

impl MarketplaceClient {
    pub fn builder() -> MarketplaceClientBuilder {
        MarketplaceClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }
}

#[async_trait]
impl OrderApi for MarketplaceClient {
    async fn fetch_order(&self, order_id: OrderId) -> Result<OrderInfo, ReviewError> {
        self.orders().get(order_id).await
    }

    async fn accept_order(&self, order_id: OrderId) -> Result<OrderResponse, ReviewError> {
        self.orders().accept(order_id).await
    }

    async fn reject_order(&self, order_id: OrderId) -> Result<OrderResponse, ReviewError> {
        self.orders().reject(order_id).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MarketplaceClientBuilder {
    base_url: String,
    timeout: Duration,
    fetch_retry: RetryPolicy,
}

impl Default for MarketplaceClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            fetch_retry: RetryPolicy::None,
        }
    }
}

impl MarketplaceClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for `GET /marketplace/orders/{id}`. Defaults to none.
    pub fn fetch_retry(mut self, policy: RetryPolicy) -> Self {
        self.fetch_retry = policy;
        self
    }

    pub fn build(self) -> Result<MarketplaceClient, ReviewError> {
        Ok(MarketplaceClient {
            http: MarketplaceHttp::new(&self.base_url, self.timeout)?,
            fetch_retry: self.fetch_retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_API_URL;

    #[test]
    fn test_builder_defaults() {
        let client = MarketplaceClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert!(matches!(client.fetch_retry, RetryPolicy::None));
    }

    #[test]
    fn test_builder_overrides() {
        let client = MarketplaceClient::builder()
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(2))
            .fetch_retry(RetryPolicy::Idempotent)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(matches!(client.fetch_retry, RetryPolicy::Idempotent));
    }
}
