//! # order-review
//!
//! Client for a marketplace seller reviewing a sale order: fetch the order,
//! show it, accept or reject it.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Newtypes, money formatting, order domain, review state (always available, WASM-safe)
//! 2. **HTTP API**: `MarketplaceHttp` with retry policies
//! 3. **High-Level Client**: `MarketplaceClient` with the `orders()` sub-client
//! 4. **Review**: `OrderReview` session, `ModalView` view model, `ReviewHost`
//! 5. **CLI**: the `order-review` binary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_review::prelude::*;
//!
//! let client = MarketplaceClient::builder().build()?;
//! let review = OrderReview::new(client);
//!
//! review.show(OrderId::new(123)).await;
//! println!("{}", review.view().await);
//! review.accept().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Modal view model and text rendering.
pub mod view;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `MarketplaceClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Review ──────────────────────────────────────────────────────────

/// `OrderReview`: fetch + accept/reject session for one order.
#[cfg(feature = "http")]
pub mod review;

/// `ReviewHost`: open/close toggle around a review.
#[cfg(feature = "http")]
pub mod host;

// ── Layer 5: CLI ─────────────────────────────────────────────────────────────

#[cfg(feature = "cli")]
pub mod cli;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::{
        bips_to_decimal, decimal_to_percent_string, format_cents, format_currency,
        minor_to_major, Bips, Cents, OrderId,
    };

    // Domain types: order
    pub use crate::domain::order::{
        FetchState, ListingInfo, OrderAction, OrderActions, OrderApi, OrderFetch, OrderInfo,
        OrderResponse, OrderStatus, TransactionInfo,
    };

    // Errors
    pub use crate::error::{HttpError, ReviewError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // View model
    pub use crate::view::{DetailLine, ModalBody, ModalView, OrderDetailsView};

    // HTTP client + review session
    #[cfg(feature = "http")]
    pub use crate::client::{MarketplaceClient, MarketplaceClientBuilder, OrdersClient};
    #[cfg(feature = "http")]
    pub use crate::host::ReviewHost;
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::review::OrderReview;
}
