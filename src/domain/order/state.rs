//! Order review state containers: app-owned, SDK-provided update logic.
//!
//! [`OrderFetch`] tracks the order currently on display and the outcome of its
//! fetch. [`OrderActions`] tracks accept/reject for that order. Neither performs
//! I/O: callers take a ticket, run the request, and hand the result back. A
//! result whose ticket has been superseded is dropped.

use super::{OrderAction, OrderInfo, OrderStatus};
use crate::error::ReviewError;
use crate::shared::OrderId;

// ─── Fetch ───────────────────────────────────────────────────────────────────

/// Identifies one fetch request: the order it was issued for and the
/// generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub order_id: OrderId,
    generation: u64,
}

/// Outcome of the current fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(OrderInfo),
    /// Fetch failed; holds the error message.
    Failed(String),
}

/// Fetch state for the order on display.
#[derive(Debug, Clone, Default)]
pub struct OrderFetch {
    order_id: Option<OrderId>,
    generation: u64,
    state: FetchState,
}

impl OrderFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn data(&self) -> Option<&OrderInfo> {
        match &self.state {
            FetchState::Loaded(order) => Some(order),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Point at `order_id`. Returns a ticket when a fetch must be issued, `None`
    /// when that order is already the current one.
    pub fn request(&mut self, order_id: OrderId) -> Option<FetchTicket> {
        if self.order_id == Some(order_id) {
            return None;
        }
        Some(self.start(order_id))
    }

    /// Force a new fetch of the current order, superseding any in flight.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        self.order_id.map(|order_id| self.start(order_id))
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && Some(ticket.order_id) == self.order_id
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<OrderInfo, String>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        self.state = match result {
            Ok(order) => FetchState::Loaded(order),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    fn start(&mut self, order_id: OrderId) -> FetchTicket {
        self.generation += 1;
        self.order_id = Some(order_id);
        self.state = FetchState::Loading;
        FetchTicket {
            order_id,
            generation: self.generation,
        }
    }
}

// ─── Actions ─────────────────────────────────────────────────────────────────

/// Identifies one accept/reject submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTicket {
    pub order_id: OrderId,
    pub action: OrderAction,
    generation: u64,
}

/// Accept/reject status and the last action error for one order.
#[derive(Debug, Clone, Default)]
pub struct OrderActions {
    generation: u64,
    status: OrderStatus,
    error: Option<String>,
}

impl OrderActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start `action` on `order_id`. Only allowed from `Pending`.
    pub fn begin(
        &mut self,
        order_id: OrderId,
        action: OrderAction,
    ) -> Result<ActionTicket, ReviewError> {
        if !self.status.accepts_actions() {
            return Err(ReviewError::ActionNotAllowed {
                action,
                status: self.status,
            });
        }
        self.status = OrderStatus::Submitting(action);
        self.error = None;
        Ok(ActionTicket {
            order_id,
            action,
            generation: self.generation,
        })
    }

    /// Finish a submission. Success moves to the terminal status; failure
    /// records the error and returns to `Pending`. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: ActionTicket, result: Result<(), String>) -> bool {
        if ticket.generation != self.generation
            || self.status != OrderStatus::Submitting(ticket.action)
        {
            return false;
        }
        match result {
            Ok(()) => {
                self.status = ticket.action.outcome();
            }
            Err(message) => {
                self.status = OrderStatus::Pending;
                self.error = Some(message);
            }
        }
        true
    }

    /// Forget everything about the previous order.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = OrderStatus::Pending;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{ListingInfo, TransactionInfo};
    use crate::shared::{Bips, Cents};

    fn order(name: &str) -> OrderInfo {
        OrderInfo {
            listing: ListingInfo {
                display_name: name.to_string(),
                brand_name: "Rolex".to_string(),
                designer_name: None,
                reference_number: "126610LN".to_string(),
                condition: "UNWORN".to_string(),
                manufacture_year: 2021,
                image_uri: None,
            },
            transaction: TransactionInfo {
                selling_price: Cents::new(500_000),
                commission: Bips::new(250),
                seller_fee: Cents::new(1500),
                insured_shipping: None,
                authentication: None,
                earnings: Cents::new(486_000),
            },
        }
    }

    #[test]
    fn test_first_request_issues_ticket_and_loads() {
        let mut fetch = OrderFetch::new();
        assert_eq!(fetch.state(), &FetchState::Idle);

        let ticket = fetch.request(OrderId::new(123)).unwrap();
        assert_eq!(ticket.order_id, OrderId::new(123));
        assert_eq!(fetch.state(), &FetchState::Loading);
        assert!(fetch.data().is_none());
    }

    #[test]
    fn test_same_id_does_not_refetch() {
        let mut fetch = OrderFetch::new();
        let ticket = fetch.request(OrderId::new(123)).unwrap();
        assert!(fetch.resolve(ticket, Ok(order("Submariner"))));
        assert!(fetch.request(OrderId::new(123)).is_none());
        assert_eq!(fetch.data().unwrap().listing.display_name, "Submariner");
    }

    #[test]
    fn test_failure_excludes_data() {
        let mut fetch = OrderFetch::new();
        let ticket = fetch.request(OrderId::new(7)).unwrap();
        assert!(fetch.resolve(ticket, Err("Not found: order 7".to_string())));
        assert!(fetch.data().is_none());
        assert_eq!(fetch.error(), Some("Not found: order 7"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut fetch = OrderFetch::new();
        let first = fetch.request(OrderId::new(1)).unwrap();
        let second = fetch.request(OrderId::new(2)).unwrap();

        assert!(fetch.resolve(second, Ok(order("Two"))));
        assert!(!fetch.resolve(first, Ok(order("One"))));

        assert_eq!(fetch.order_id(), Some(OrderId::new(2)));
        assert_eq!(fetch.data().unwrap().listing.display_name, "Two");
    }

    #[test]
    fn test_stale_response_for_same_id_after_refresh_is_discarded() {
        let mut fetch = OrderFetch::new();
        let first = fetch.request(OrderId::new(1)).unwrap();
        let refreshed = fetch.refresh().unwrap();
        assert_eq!(refreshed.order_id, OrderId::new(1));

        assert!(!fetch.resolve(first, Err("timeout".to_string())));
        assert_eq!(fetch.state(), &FetchState::Loading);
        assert!(fetch.resolve(refreshed, Ok(order("One"))));
    }

    #[test]
    fn test_refresh_without_order_is_noop() {
        let mut fetch = OrderFetch::new();
        assert!(fetch.refresh().is_none());
        assert_eq!(fetch.state(), &FetchState::Idle);
    }

    #[test]
    fn test_accept_reaches_terminal_state() {
        let mut actions = OrderActions::new();
        let ticket = actions.begin(OrderId::new(1), OrderAction::Accept).unwrap();
        assert_eq!(actions.status(), OrderStatus::Submitting(OrderAction::Accept));
        assert!(actions.complete(ticket, Ok(())));
        assert_eq!(actions.status(), OrderStatus::Accepted);

        let err = actions
            .begin(OrderId::new(1), OrderAction::Reject)
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewError::ActionNotAllowed {
                action: OrderAction::Reject,
                status: OrderStatus::Accepted
            }
        ));
    }

    #[test]
    fn test_second_action_refused_while_submitting() {
        let mut actions = OrderActions::new();
        actions.begin(OrderId::new(1), OrderAction::Accept).unwrap();
        assert!(actions.begin(OrderId::new(1), OrderAction::Reject).is_err());
    }

    #[test]
    fn test_failed_action_records_error_and_allows_retry() {
        let mut actions = OrderActions::new();
        let ticket = actions.begin(OrderId::new(1), OrderAction::Reject).unwrap();
        assert!(actions.complete(ticket, Err("Server error 503: down".to_string())));
        assert_eq!(actions.status(), OrderStatus::Pending);
        assert_eq!(actions.error(), Some("Server error 503: down"));

        actions.begin(OrderId::new(1), OrderAction::Reject).unwrap();
        assert!(actions.error().is_none());
    }

    #[test]
    fn test_reset_discards_in_flight_action() {
        let mut actions = OrderActions::new();
        let ticket = actions.begin(OrderId::new(1), OrderAction::Accept).unwrap();
        actions.reset();
        assert!(!actions.complete(ticket, Ok(())));
        assert_eq!(actions.status(), OrderStatus::Pending);
    }
}
