//! Against the hosted mock marketplace. Run with `cargo test -- --ignored`.

#![cfg(feature = "http")]

use order_review::network::{API_URL_ENV, DEFAULT_API_URL};
use order_review::prelude::*;

fn client() -> MarketplaceClient {
    let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    MarketplaceClient::builder()
        .base_url(&url)
        .fetch_retry(RetryPolicy::Idempotent)
        .build()
        .unwrap()
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_fetch_order() {
    let order = client().orders().get(OrderId::new(123)).await.unwrap();
    assert!(!order.listing.display_name.is_empty());
    assert!(!order.listing.brand_name.is_empty());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_review_accept() {
    let review = OrderReview::new(client());
    review.show(OrderId::new(123)).await;
    assert!(review.view().await.details().is_some());

    review.accept().await.unwrap();
    assert_eq!(review.status().await, OrderStatus::Accepted);
}
