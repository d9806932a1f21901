//! Modal view model for reviewing a sale.
//!
//! [`ModalView`] is a pure function of the fetch and action state. The body is
//! exactly one of loading, loaded details, or a fetch error; an action error is
//! an orthogonal banner that never hides loaded details.

mod render;

use crate::domain::order::{FetchState, OrderActions, OrderFetch, OrderInfo, OrderStatus};
use crate::shared::{
    decimal_to_percent_string, format_cents, format_currency, Cents, OrderId,
};
use serde::Serialize;

pub const HEADLINE: &str = "CONGRATS!";
pub const SUBHEADLINE: &str = "Your Watch Sold!";
pub const ACCEPT_NOTICE: &str =
    "You have 1 business day to accept the sale. If you do not accept, it will be automatically rejected.";
pub const ACCEPT_LABEL: &str = "Accept Sale";
pub const REJECT_LABEL: &str = "Reject Sale";

const FREE: &str = "Free";
const UNKNOWN: &str = "Unknown";

/// One label/value row of the transaction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: String,
    pub value: String,
}

impl DetailLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Display-ready order details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailsView {
    /// `"<brand> <model>"`.
    pub title: String,
    /// `"<designer> <reference>"`, or just the reference when the designer is unknown.
    pub subtitle: String,
    /// `"<Condition> / <year>"`.
    pub condition: String,
    pub image_uri: Option<String>,
    pub commission_percent: String,
    pub lines: Vec<DetailLine>,
    pub earnings: DetailLine,
}

impl OrderDetailsView {
    pub fn from_order(order: &OrderInfo) -> Self {
        let listing = &order.listing;
        let tx = &order.transaction;

        let subtitle = match &listing.designer_name {
            Some(designer) => format!("{} {}", designer, listing.reference_number),
            None => listing.reference_number.clone(),
        };
        let commission_percent = decimal_to_percent_string(tx.commission_rate());

        let lines = vec![
            DetailLine::new("Selling Price", format_cents(tx.selling_price)),
            DetailLine::new(
                format!("Level 1 Commission ({})", commission_percent),
                format_currency(tx.commission_amount()),
            ),
            DetailLine::new("Seller fee", fee_amount(tx.seller_fee)),
            DetailLine::new("Insured Shipping", optional_amount(tx.insured_shipping)),
            DetailLine::new("Bezel authentication", optional_amount(tx.authentication)),
        ];

        Self {
            title: format!("{} {}", listing.brand_name, listing.display_name),
            subtitle,
            condition: format!(
                "{} / {}",
                title_case(&listing.condition),
                listing.manufacture_year
            ),
            image_uri: listing.image_uri.clone(),
            commission_percent,
            lines,
            earnings: DetailLine::new("Earnings", format_cents(tx.earnings)),
        }
    }

    pub fn line(&self, label: &str) -> Option<&DetailLine> {
        self.lines.iter().find(|l| l.label == label)
    }
}

/// A known zero is free.
fn fee_amount(cents: Cents) -> String {
    if cents.is_zero() {
        FREE.to_string()
    } else {
        format_cents(cents)
    }
}

/// Unknown amounts are shown as such.
fn optional_amount(amount: Option<Cents>) -> String {
    amount.map_or_else(|| UNKNOWN.to_string(), fee_amount)
}

/// `"VERY_GOOD"` → `"Very Good"`, `"unworn"` → `"Unworn"`.
fn title_case(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Main panel of the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModalBody {
    /// No order requested yet.
    Empty,
    Loading,
    Loaded {
        details: OrderDetailsView,
        /// False once an action is in flight or the order is decided.
        controls_enabled: bool,
    },
    /// Fetch failed. No controls are rendered in this state.
    Failed { message: String },
}

/// Everything the modal needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub order_id: Option<OrderId>,
    pub status: OrderStatus,
    pub body: ModalBody,
    /// Last accept/reject failure.
    pub action_error: Option<String>,
}

impl ModalView {
    pub fn from_state(fetch: &OrderFetch, actions: &OrderActions) -> Self {
        let status = actions.status();
        let body = match fetch.state() {
            FetchState::Idle => ModalBody::Empty,
            FetchState::Loading => ModalBody::Loading,
            FetchState::Loaded(order) => ModalBody::Loaded {
                details: OrderDetailsView::from_order(order),
                controls_enabled: status.accepts_actions(),
            },
            FetchState::Failed(message) => ModalBody::Failed {
                message: message.clone(),
            },
        };

        Self {
            order_id: fetch.order_id(),
            status,
            body,
            action_error: actions.error().map(str::to_string),
        }
    }

    pub fn details(&self) -> Option<&OrderDetailsView> {
        match &self.body {
            ModalBody::Loaded { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Whether accept/reject controls are shown at all.
    pub fn shows_controls(&self) -> bool {
        matches!(self.body, ModalBody::Loaded { .. })
    }

    pub fn controls_enabled(&self) -> bool {
        matches!(
            self.body,
            ModalBody::Loaded {
                controls_enabled: true,
                ..
            }
        )
    }

    pub fn fetch_error(&self) -> Option<&str> {
        match &self.body {
            ModalBody::Failed { message } => Some(message),
            _ => None,
        }
    }
}
