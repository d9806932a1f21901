//! Conversions: wire types → Order domain types.

use super::wire;
use super::{ListingInfo, OrderInfo, OrderResponse, TransactionInfo};

impl From<wire::OrderDetailsResponse> for OrderInfo {
    fn from(details: wire::OrderDetailsResponse) -> Self {
        let wire::ListingResponse {
            model,
            condition,
            manufacture_year,
            images,
        } = details.listing;

        OrderInfo {
            listing: ListingInfo {
                display_name: model.display_name,
                brand_name: model.brand.display_name,
                designer_name: None,
                reference_number: model.reference_number,
                condition,
                manufacture_year,
                image_uri: images.into_iter().next().map(|img| img.image.url),
            },
            transaction: TransactionInfo {
                selling_price: details.sale_price_cents,
                commission: details.commission_rate_bips,
                seller_fee: details.seller_fee_cents,
                insured_shipping: None,
                authentication: None,
                earnings: details.payout_amount_cents,
            },
        }
    }
}

impl From<wire::OrderActionResponse> for OrderResponse {
    fn from(body: wire::OrderActionResponse) -> Self {
        let response = match body {
            wire::OrderActionResponse::Status { response } => response,
            wire::OrderActionResponse::Other(serde_json::Value::Null) => String::new(),
            wire::OrderActionResponse::Other(serde_json::Value::String(s)) => s,
            wire::OrderActionResponse::Other(other) => other.to_string(),
        };
        OrderResponse { response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Bips, Cents};

    const ORDER_JSON: &str = r#"{
        "id": 123,
        "listing": {
            "id": 77,
            "model": {
                "displayName": "Submariner Date",
                "referenceNumber": "126610LN",
                "brand": { "displayName": "Rolex" }
            },
            "condition": "UNWORN",
            "manufactureYear": 2021,
            "images": [
                { "image": { "url": "https://cdn.example.com/a.jpg" } },
                { "image": { "url": "https://cdn.example.com/b.jpg" } }
            ]
        },
        "salePriceCents": 500000,
        "commissionRateBips": 250,
        "sellerFeeCents": 1500,
        "payoutAmountCents": 486000
    }"#;

    #[test]
    fn test_order_details_flatten() {
        let wire: wire::OrderDetailsResponse = serde_json::from_str(ORDER_JSON).unwrap();
        let order = OrderInfo::from(wire);

        assert_eq!(order.listing.display_name, "Submariner Date");
        assert_eq!(order.listing.brand_name, "Rolex");
        assert_eq!(order.listing.reference_number, "126610LN");
        assert_eq!(order.listing.condition, "UNWORN");
        assert_eq!(order.listing.manufacture_year, 2021);
        assert_eq!(
            order.listing.image_uri.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(order.transaction.selling_price, Cents::new(500_000));
        assert_eq!(order.transaction.commission, Bips::new(250));
        assert_eq!(order.transaction.seller_fee, Cents::new(1500));
        assert_eq!(order.transaction.earnings, Cents::new(486_000));
    }

    #[test]
    fn test_unmapped_fields_stay_unknown() {
        let wire: wire::OrderDetailsResponse = serde_json::from_str(ORDER_JSON).unwrap();
        let order = OrderInfo::from(wire);
        assert!(order.listing.designer_name.is_none());
        assert!(order.transaction.insured_shipping.is_none());
        assert!(order.transaction.authentication.is_none());
    }

    #[test]
    fn test_missing_images_means_no_image() {
        let mut value: serde_json::Value = serde_json::from_str(ORDER_JSON).unwrap();
        value["listing"]["images"] = serde_json::json!([]);
        let empty: wire::OrderDetailsResponse = serde_json::from_value(value.clone()).unwrap();
        assert!(OrderInfo::from(empty).listing.image_uri.is_none());

        value["listing"]
            .as_object_mut()
            .unwrap()
            .remove("images");
        let missing: wire::OrderDetailsResponse = serde_json::from_value(value).unwrap();
        assert!(OrderInfo::from(missing).listing.image_uri.is_none());
    }

    #[test]
    fn test_action_response_variants() {
        let status: wire::OrderActionResponse =
            serde_json::from_str(r#"{"response": "accepted"}"#).unwrap();
        assert_eq!(OrderResponse::from(status).response, "accepted");

        let null: wire::OrderActionResponse = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(OrderResponse::from(null).response, "");

        let text: wire::OrderActionResponse = serde_json::from_str(r#""ok""#).unwrap();
        assert_eq!(OrderResponse::from(text).response, "ok");

        let other: wire::OrderActionResponse =
            serde_json::from_str(r#"{"status": "DECLINED"}"#).unwrap();
        assert_eq!(OrderResponse::from(other).response, r#"{"status":"DECLINED"}"#);
    }
}
