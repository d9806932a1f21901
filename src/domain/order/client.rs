//! Orders sub-client: fetch, accept, reject.
//!
//! No client-side guard here: calling `accept` and then `reject` issues two
//! requests. The review session in [`crate::review`] enforces the status machine.

use super::{OrderAction, OrderInfo, OrderResponse};
use crate::client::MarketplaceClient;
use crate::error::ReviewError;
use crate::shared::OrderId;

pub struct Orders<'a> {
    pub(crate) client: &'a MarketplaceClient,
}

impl<'a> Orders<'a> {
    /// `GET /marketplace/orders/{id}`, flattened into an [`OrderInfo`].
    pub async fn get(&self, order_id: OrderId) -> Result<OrderInfo, ReviewError> {
        let details = self
            .client
            .http
            .get_order(order_id, self.client.fetch_retry.clone())
            .await
            .map_err(|e| {
                tracing::error!(%order_id, endpoint = "orders.get", error = %e, "Failed to fetch order");
                e
            })?;
        Ok(details.into())
    }

    /// `POST /marketplace/orders/{id}/accept`.
    pub async fn accept(&self, order_id: OrderId) -> Result<OrderResponse, ReviewError> {
        self.act(order_id, OrderAction::Accept).await
    }

    /// `POST /marketplace/orders/{id}/decline`.
    pub async fn reject(&self, order_id: OrderId) -> Result<OrderResponse, ReviewError> {
        self.act(order_id, OrderAction::Reject).await
    }

    async fn act(
        &self,
        order_id: OrderId,
        action: OrderAction,
    ) -> Result<OrderResponse, ReviewError> {
        let body = self
            .client
            .http
            .post_order_action(order_id, action)
            .await
            .map_err(|e| {
                tracing::error!(
                    %order_id,
                    endpoint = action.endpoint(),
                    error = %e,
                    "Failed to {} order",
                    action
                );
                e
            })?;
        Ok(body.into())
    }
}
