//! HTTP client layer: `MarketplaceHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::MarketplaceHttp;
pub use retry::{RetryConfig, RetryPolicy};
