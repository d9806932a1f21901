//! Order domain: sale order details, accept/reject actions, review state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::error::ReviewError;
use crate::shared::{commission_major, Bips, Cents, OrderId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{ActionTicket, FetchState, FetchTicket, OrderActions, OrderFetch};

// ─── ListingInfo ─────────────────────────────────────────────────────────────

/// The watch being sold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingInfo {
    pub display_name: String,
    pub brand_name: String,
    /// Not present in the upstream payload.
    pub designer_name: Option<String>,
    pub reference_number: String,
    /// Free-text condition category, as sent upstream (e.g. `"UNWORN"`).
    pub condition: String,
    pub manufacture_year: i32,
    pub image_uri: Option<String>,
}

// ─── TransactionInfo ─────────────────────────────────────────────────────────

/// Money side of the sale. Amounts are cents; commission is bips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionInfo {
    pub selling_price: Cents,
    pub commission: Bips,
    pub seller_fee: Cents,
    /// Not present in the upstream payload.
    pub insured_shipping: Option<Cents>,
    /// Not present in the upstream payload.
    pub authentication: Option<Cents>,
    pub earnings: Cents,
}

impl TransactionInfo {
    /// Commission rate as a decimal fraction.
    pub fn commission_rate(&self) -> Decimal {
        self.commission.as_decimal()
    }

    /// Commission in dollars, rounded to cents.
    pub fn commission_amount(&self) -> Decimal {
        commission_major(self.selling_price, self.commission)
    }
}

// ─── OrderInfo ───────────────────────────────────────────────────────────────

/// A fetched order snapshot. The order id is tracked by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInfo {
    pub listing: ListingInfo,
    pub transaction: TransactionInfo,
}

// ─── OrderResponse ───────────────────────────────────────────────────────────

/// Opaque status returned by accept/reject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderResponse {
    pub response: String,
}

// ─── OrderAction ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Accept,
    Reject,
}

impl OrderAction {
    /// Final path segment of the action endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            OrderAction::Accept => "accept",
            OrderAction::Reject => "decline",
        }
    }

    /// Status reached when the action succeeds.
    pub fn outcome(&self) -> OrderStatus {
        match self {
            OrderAction::Accept => OrderStatus::Accepted,
            OrderAction::Reject => OrderStatus::Rejected,
        }
    }
}

impl std::fmt::Display for OrderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderAction::Accept => write!(f, "accept"),
            OrderAction::Reject => write!(f, "reject"),
        }
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Client-side review status: `Pending → Submitting → Accepted | Rejected`.
///
/// `Accepted` and `Rejected` are terminal. A failed submission returns to `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Submitting(OrderAction),
    Accepted,
    Rejected,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Accepted | OrderStatus::Rejected)
    }

    /// Whether a new accept/reject may be started.
    pub fn accepts_actions(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Submitting(OrderAction::Accept) => write!(f, "being accepted"),
            OrderStatus::Submitting(OrderAction::Reject) => write!(f, "being rejected"),
            OrderStatus::Accepted => write!(f, "accepted"),
            OrderStatus::Rejected => write!(f, "rejected"),
        }
    }
}

// ─── OrderApi ────────────────────────────────────────────────────────────────

/// The three marketplace calls a review needs.
///
/// Implemented by [`crate::client::MarketplaceClient`]; tests drive the review
/// session with in-memory implementations.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn fetch_order(&self, order_id: OrderId) -> Result<OrderInfo, ReviewError>;

    async fn accept_order(&self, order_id: OrderId) -> Result<OrderResponse, ReviewError>;

    async fn reject_order(&self, order_id: OrderId) -> Result<OrderResponse, ReviewError>;

    async fn perform(
        &self,
        order_id: OrderId,
        action: OrderAction,
    ) -> Result<OrderResponse, ReviewError> {
        match action {
            OrderAction::Accept => self.accept_order(order_id).await,
            OrderAction::Reject => self.reject_order(order_id).await,
        }
    }
}
