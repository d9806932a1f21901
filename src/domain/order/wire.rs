//! Wire types for the marketplace order endpoints.

use crate::shared::{Bips, Cents};
use serde::Deserialize;

// ─── GET /marketplace/orders/{id} ────────────────────────────────────────────

/// Order details as sent by the marketplace.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsResponse {
    pub listing: ListingResponse,
    pub sale_price_cents: Cents,
    pub commission_rate_bips: Bips,
    pub seller_fee_cents: Cents,
    pub payout_amount_cents: Cents,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub model: WatchModel,
    pub condition: String,
    pub manufacture_year: i32,
    #[serde(default)]
    pub images: Vec<ListingImage>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WatchModel {
    pub display_name: String,
    pub reference_number: String,
    pub brand: Brand,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub display_name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ListingImage {
    pub image: ImageRef,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ImageRef {
    pub url: String,
}

// ─── POST /marketplace/orders/{id}/{accept,decline} ──────────────────────────

/// Accept/decline body. The service documents `{"response": "..."}`, but any
/// JSON (or an empty body, read as `null`) is tolerated.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum OrderActionResponse {
    Status { response: String },
    Other(serde_json::Value),
}
