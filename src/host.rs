//! Host: mounts the review modal behind an open/close toggle.

use crate::domain::order::OrderApi;
use crate::review::OrderReview;
use crate::shared::OrderId;
use crate::view::ModalView;

/// Local UI state around one [`OrderReview`]: which order, and whether the
/// modal is open. Opens by default.
pub struct ReviewHost<A> {
    review: OrderReview<A>,
    order_id: OrderId,
    is_open: bool,
}

impl<A: OrderApi> ReviewHost<A> {
    pub fn new(review: OrderReview<A>, order_id: OrderId) -> Self {
        Self {
            review,
            order_id,
            is_open: true,
        }
    }

    pub fn review(&self) -> &OrderReview<A> {
        &self.review
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Bring the modal on screen, fetching if the order is not loaded yet.
    pub async fn mount(&self) {
        if self.is_open {
            self.review.show(self.order_id).await;
        }
    }

    pub async fn open(&mut self) {
        self.is_open = true;
        self.mount().await;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub async fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open().await;
        }
    }

    /// Point the host at another order. Fetches right away while open,
    /// otherwise on the next `open`.
    pub async fn set_order(&mut self, order_id: OrderId) {
        self.order_id = order_id;
        self.mount().await;
    }

    /// The modal, or `None` while closed.
    pub async fn render(&self) -> Option<ModalView> {
        if !self.is_open {
            return None;
        }
        Some(self.review.view().await)
    }
}
