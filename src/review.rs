//! Review session: one seller reviewing one order at a time.
//!
//! `OrderReview` owns an [`OrderFetch`] and an [`OrderActions`] behind a lock and
//! drives them against any [`OrderApi`]. The lock is only taken to issue or
//! resolve a ticket, never across a network call, so a late response for an order
//! that is no longer on display is simply discarded.

use crate::domain::order::{
    FetchTicket, OrderAction, OrderActions, OrderApi, OrderFetch, OrderResponse, OrderStatus,
};
use crate::error::ReviewError;
use crate::shared::OrderId;
use crate::view::ModalView;

use async_lock::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ReviewState {
    fetch: OrderFetch,
    actions: OrderActions,
}

/// Fetch + accept/reject state for the order on display.
///
/// Cloning is cheap and clones share state.
pub struct OrderReview<A> {
    api: Arc<A>,
    state: Arc<RwLock<ReviewState>>,
}

impl<A> Clone for OrderReview<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: OrderApi> OrderReview<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared(Arc::new(api))
    }

    pub fn with_shared(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(ReviewState::default())),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Display `order_id`. Fetches only when it differs from the order already
    /// on display; switching orders also resets accept/reject state.
    pub async fn show(&self, order_id: OrderId) {
        let ticket = {
            let mut state = self.state.write().await;
            let ticket = state.fetch.request(order_id);
            if ticket.is_some() {
                state.actions.reset();
            }
            ticket
        };

        if let Some(ticket) = ticket {
            self.run_fetch(ticket).await;
        }
    }

    /// Fetch the current order again.
    pub async fn refresh(&self) {
        let ticket = self.state.write().await.fetch.refresh();
        if let Some(ticket) = ticket {
            self.run_fetch(ticket).await;
        }
    }

    async fn run_fetch(&self, ticket: FetchTicket) {
        let result = self
            .api
            .fetch_order(ticket.order_id)
            .await
            .map_err(|e| e.to_string());

        let applied = self.state.write().await.fetch.resolve(ticket, result);
        if !applied {
            tracing::debug!(order_id = %ticket.order_id, "Discarding superseded order response");
        }
    }

    pub async fn accept(&self) -> Result<OrderResponse, ReviewError> {
        self.act(OrderAction::Accept).await
    }

    pub async fn reject(&self) -> Result<OrderResponse, ReviewError> {
        self.act(OrderAction::Reject).await
    }

    /// Submit `action` for the loaded order.
    ///
    /// A failure is also recorded as the view's action error; the returned
    /// `Result` is for callers that want to react directly.
    pub async fn act(&self, action: OrderAction) -> Result<OrderResponse, ReviewError> {
        let ticket = {
            let mut state = self.state.write().await;
            let order_id = match (state.fetch.order_id(), state.fetch.data()) {
                (Some(order_id), Some(_)) => order_id,
                _ => return Err(ReviewError::OrderNotLoaded),
            };
            state.actions.begin(order_id, action)?
        };

        let result = self.api.perform(ticket.order_id, action).await;

        let mut state = self.state.write().await;
        let outcome = match &result {
            Ok(resp) => {
                tracing::info!(
                    order_id = %ticket.order_id,
                    %action,
                    response = %resp.response,
                    "Order {} succeeded",
                    action
                );
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        };
        if !state.actions.complete(ticket, outcome) {
            tracing::debug!(order_id = %ticket.order_id, %action, "Discarding superseded action result");
        }
        result
    }

    pub async fn order_id(&self) -> Option<OrderId> {
        self.state.read().await.fetch.order_id()
    }

    pub async fn status(&self) -> OrderStatus {
        self.state.read().await.actions.status()
    }

    pub async fn view(&self) -> ModalView {
        let state = self.state.read().await;
        ModalView::from_state(&state.fetch, &state.actions)
    }
}
