//! Wire codec for the canonical order message.
//!
//! The encoding is self-describing JSON: fixed snake_case keys, irrelevant
//! key order, optional fields omitted or `null`. Decoding tolerates unknown
//! keys so that consumers keep working when producers add optional fields.

use serde_json::error::Category;
use thiserror::Error;

use super::CanonicalOrder;

/// Failure decoding (or, rarely, encoding) a canonical order.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not structurally valid JSON (syntax error, truncation).
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The payload is valid JSON but a required field is missing or has the
    /// wrong shape.
    #[error("schema violation: {0}")]
    SchemaViolation(#[source] serde_json::Error),
}

/// Encode an order into its queue representation.
///
/// # Errors
///
/// Returns [`CodecError::MalformedPayload`] if serialization fails; with a
/// well-formed order this does not happen in practice.
pub fn encode(order: &CanonicalOrder) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(order).map_err(classify)
}

/// Decode a queue payload back into an order.
///
/// Unknown fields in the payload are ignored.
///
/// # Errors
///
/// Returns [`CodecError::MalformedPayload`] on structural JSON errors and
/// [`CodecError::SchemaViolation`] when a required field is missing or has
/// the wrong shape.
pub fn decode(bytes: &[u8]) -> Result<CanonicalOrder, CodecError> {
    serde_json::from_slice(bytes).map_err(classify)
}

fn classify(err: serde_json::Error) -> CodecError {
    match err.classify() {
        Category::Data => CodecError::SchemaViolation(err),
        Category::Io | Category::Syntax | Category::Eof => CodecError::MalformedPayload(err),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::testutil::minimal_order;
    use super::super::{
        ChannelMetadata, OrderAddress, OrderItem, OrderPayment, OrderShipment, PaymentState,
        RawDocument,
    };
    use super::*;

    fn full_order() -> CanonicalOrder {
        let mut order = minimal_order();
        order.business_id = Some(91.into());
        order.cod_total = Some(Decimal::new(1300, 2));
        order.customer_id = Some(12.into());
        order.customer_name = Some("Ada Lovelace".to_string());
        order.customer_email = Some("ada@example.com".to_string());
        order.customer_phone = Some("+51 999 999 999".to_string());
        order.customer_national_id = Some("12345678".to_string());
        order.order_type_id = Some(2.into());
        order.order_type_name = "marketplace".to_string();
        order.approved = Some(true);
        order.invoiceable = true;
        order.invoice_url = Some("https://invoices.example/I1.pdf".to_string());
        order.invoice_id = Some("F001-123".to_string());
        order.invoice_provider = Some("sunat".to_string());
        order.order_status_url = Some("https://track.example/N1".to_string());
        order.notes = "leave at the front desk".to_string();
        order.coupon_code = "WELCOME10".to_string();
        order.order_items = vec![OrderItem {
            external_id: Some("it-1".to_string()),
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            quantity: 2,
            unit_price: Decimal::new(500, 2),
            discount: Decimal::ZERO,
            tax: Decimal::new(100, 2),
            total_price: Decimal::new(1100, 2),
            currency: None,
        }];
        order.addresses = vec![OrderAddress {
            address_type: "shipping".to_string(),
            line1: "Av. Arequipa 123".to_string(),
            line2: None,
            city: "Lima".to_string(),
            state: "Lima".to_string(),
            postal_code: "15046".to_string(),
            country: "PE".to_string(),
            latitude: Some(-12.0464),
            longitude: Some(-77.0428),
        }];
        order.payments = vec![OrderPayment {
            method: Some("credit_card".to_string()),
            status: PaymentState::Paid,
            amount: Decimal::new(1300, 2),
            refund_amount: None,
            currency: None,
            transaction_id: Some("tx-778".to_string()),
            paid_at: Some("2024-01-01T00:00:00-05:00".parse().unwrap()),
        }];
        order.shipments = vec![OrderShipment {
            carrier: Some("olva".to_string()),
            tracking_number: Some("TRK-1".to_string()),
            tracking_url: None,
            status: Some("in_transit".to_string()),
            shipped_at: Some("2024-01-02T08:00:00Z".parse().unwrap()),
            delivered_at: None,
            weight: Some(Decimal::new(15, 1)),
            height: None,
            width: None,
            length: None,
            is_last_mile: true,
            shipping_address_id: Some(0),
        }];
        order.channel_metadata = Some(ChannelMetadata {
            version: "2".to_string(),
            raw_payload: Some(
                RawDocument::from_string(r#"{"orderId":"X1","origin":"vtex"}"#.to_string())
                    .unwrap(),
            ),
            first_synced_at: "2024-01-01T00:00:01Z".parse().unwrap(),
            last_synced_at: "2024-01-01T00:00:01Z".parse().unwrap(),
            is_latest: true,
        });
        order.raw_items = Some(RawDocument::from_string(r#"[{"id":"it-1"}]"#.to_string()).unwrap());
        order.financial_details =
            Some(RawDocument::from_string(r#"{"installments":3}"#.to_string()).unwrap());
        order
    }

    #[test]
    fn test_round_trip_minimal_order() {
        let order = minimal_order();
        let bytes = encode(&order).unwrap();
        let back = decode(&bytes).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_round_trip_full_order() {
        let order = full_order();
        let bytes = encode(&order).unwrap();
        let back = decode(&bytes).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_envelopes_pass_through_verbatim() {
        let order = full_order();
        let bytes = encode(&order).unwrap();
        let back = decode(&bytes).unwrap();

        assert_eq!(
            back.channel_metadata.unwrap().raw_payload.unwrap().get(),
            r#"{"orderId":"X1","origin":"vtex"}"#
        );
        assert_eq!(back.raw_items.unwrap().get(), r#"[{"id":"it-1"}]"#);
        assert_eq!(
            back.financial_details.unwrap().get(),
            r#"{"installments":3}"#
        );
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let order = minimal_order();
        let bytes = encode(&order).unwrap();

        // Splice two unknown keys into the payload, as a newer producer would.
        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let map = value.as_object_mut().unwrap();
        map.insert("loyalty_points".to_string(), serde_json::json!(120));
        map.insert(
            "fraud_check".to_string(),
            serde_json::json!({"score": 0.02}),
        );
        let widened = serde_json::to_vec(&value).unwrap();

        let back = decode(&widened).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_decode_missing_required_field_is_schema_violation() {
        let order = minimal_order();
        let bytes = encode(&order).unwrap();

        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value.as_object_mut().unwrap().remove("integration_id");
        let narrowed = serde_json::to_vec(&value).unwrap();

        let err = decode(&narrowed).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation(_)), "{err}");
    }

    #[test]
    fn test_decode_wrong_field_shape_is_schema_violation() {
        let order = minimal_order();
        let bytes = encode(&order).unwrap();

        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("invoiceable".to_string(), serde_json::json!("yes"));
        let bent = serde_json::to_vec(&value).unwrap();

        let err = decode(&bent).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation(_)), "{err}");
    }

    #[test]
    fn test_decode_garbage_is_malformed_payload() {
        let err = decode(b"{\"integration_id\": 7,").unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload(_)), "{err}");

        let err = decode(b"not json at all").unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload(_)), "{err}");
    }

    #[test]
    fn test_decode_tolerates_explicit_nulls_for_optionals() {
        let order = minimal_order();
        let bytes = encode(&order).unwrap();

        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let map = value.as_object_mut().unwrap();
        map.insert("business_id".to_string(), serde_json::Value::Null);
        map.insert("approved".to_string(), serde_json::Value::Null);
        map.insert("raw_metadata".to_string(), serde_json::Value::Null);
        let nulled = serde_json::to_vec(&value).unwrap();

        let back = decode(&nulled).unwrap();
        assert_eq!(back, order);
    }
}
