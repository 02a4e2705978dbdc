//! The canonical order message.
//!
//! A [`CanonicalOrder`] is the platform-neutral representation of one order
//! event, built by a channel adapter (VTEX, etc.), encoded to JSON, and
//! enqueued for asynchronous processing. It is frozen on serialization and
//! never mutated in transit.
//!
//! # Compatibility rules
//!
//! - Field names are fixed snake_case; field ordering is irrelevant.
//! - Absent optional fields may be omitted or emitted as `null`.
//! - Consumers MUST ignore unknown fields (adding an optional field is a
//!   minor change).
//! - Adding a required field or changing a field's type is a breaking change
//!   and requires bumping the version carried in [`ChannelMetadata`].

mod codec;
mod validate;

pub use codec::{CodecError, decode, encode};
pub use validate::ValidationError;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::types::{BusinessId, CustomerId, IntegrationId, OrderTypeId};

/// A pre-serialized JSON fragment passed through the canonical layer untouched.
///
/// Platform-specific producers ship their native representation inside these
/// envelopes so the canonical schema does not have to grow for every platform
/// quirk. The canonical layer never parses the content; downstream consumers
/// that hold platform-specific parsers do.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument(Box<RawValue>);

impl RawDocument {
    /// Wrap a JSON string as an opaque envelope.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `json` is not valid JSON.
    pub fn from_string(json: String) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json).map(Self)
    }

    /// The raw JSON text.
    #[must_use]
    pub fn get(&self) -> &str {
        self.0.get()
    }
}

impl PartialEq for RawDocument {
    fn eq(&self, other: &Self) -> bool {
        self.0.get() == other.0.get()
    }
}

/// State of a payment, controlled vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    /// Payment not yet attempted or awaiting confirmation.
    Pending,
    /// Payment authorized but not captured.
    Authorized,
    /// Payment captured.
    Paid,
    /// Part of the payment returned to the customer.
    PartiallyRefunded,
    /// Full payment returned to the customer.
    Refunded,
    /// Payment attempt failed.
    Failed,
    /// Payment cancelled before settlement.
    Cancelled,
}

impl PaymentState {
    /// Whether this state implies money has settled (so `paid_at` must be set).
    #[must_use]
    pub const fn implies_settlement(self) -> bool {
        matches!(self, Self::Paid | Self::PartiallyRefunded | Self::Refunded)
    }
}

/// An immutable message describing one order event at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOrder {
    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------
    /// Integration this order belongs to.
    pub integration_id: IntegrationId,
    /// Kind of integration (e.g. "vtex").
    pub integration_type: String,
    /// Name of the upstream platform that produced the raw order.
    pub platform: String,
    /// Platform-native order identifier.
    pub external_id: String,
    /// Human-facing order number.
    pub order_number: String,
    /// Internal sequential number assigned by the adapter.
    pub internal_number: String,
    /// Owning business, when the integration serves more than one.
    #[serde(default)]
    pub business_id: Option<BusinessId>,

    // ------------------------------------------------------------------
    // Monetary (non-negative decimals, at most 4 fractional digits)
    // ------------------------------------------------------------------
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub shipping_cost: Decimal,
    /// Must equal `subtotal + tax + shipping_cost - discount` within epsilon.
    pub total_amount: Decimal,
    /// ISO 4217 alphabetic currency code shared by every monetary value
    /// unless a line explicitly overrides it.
    pub currency: String,
    /// Cash-on-delivery total, when the order is paid on delivery.
    #[serde(default)]
    pub cod_total: Option<Decimal>,

    // ------------------------------------------------------------------
    // Party
    // ------------------------------------------------------------------
    /// Internal customer id, when the adapter already linked one.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    /// National identity document (DNI, CPF, ...).
    #[serde(default)]
    pub customer_national_id: Option<String>,

    // ------------------------------------------------------------------
    // Classification & state
    // ------------------------------------------------------------------
    #[serde(default)]
    pub order_type_id: Option<OrderTypeId>,
    /// Display name for the order type; empty when unknown.
    #[serde(default)]
    pub order_type_name: String,
    /// Canonical status string.
    pub status: String,
    /// Platform-native status string, preserved verbatim.
    pub original_status: String,
    /// Tri-state approval flag: `true`, `false`, or unknown.
    #[serde(default)]
    pub approved: Option<bool>,
    pub invoiceable: bool,
    #[serde(default)]
    pub invoice_url: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub invoice_provider: Option<String>,
    /// Customer-facing order tracking URL. Carries an omit-if-empty hint on
    /// the wire, unlike the other optional strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status_url: Option<String>,
    /// Free-form notes; empty when unknown.
    #[serde(default)]
    pub notes: String,
    /// Applied coupon code; empty when none.
    #[serde(default)]
    pub coupon_code: String,

    // ------------------------------------------------------------------
    // Timestamps (ISO 8601 with timezone)
    // ------------------------------------------------------------------
    /// Event time at the source platform.
    pub occurred_at: DateTime<FixedOffset>,
    /// Time the adapter produced this message. Never earlier than
    /// `occurred_at`.
    pub imported_at: DateTime<FixedOffset>,

    // ------------------------------------------------------------------
    // Collections (ordered)
    // ------------------------------------------------------------------
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub addresses: Vec<OrderAddress>,
    #[serde(default)]
    pub payments: Vec<OrderPayment>,
    #[serde(default)]
    pub shipments: Vec<OrderShipment>,
    #[serde(default)]
    pub channel_metadata: Option<ChannelMetadata>,

    // ------------------------------------------------------------------
    // Opaque envelopes (pre-serialized JSON, never parsed here)
    // ------------------------------------------------------------------
    #[serde(default)]
    pub raw_items: Option<RawDocument>,
    #[serde(default)]
    pub raw_metadata: Option<RawDocument>,
    #[serde(default)]
    pub financial_details: Option<RawDocument>,
    #[serde(default)]
    pub shipping_details: Option<RawDocument>,
    #[serde(default)]
    pub payment_details: Option<RawDocument>,
    #[serde(default)]
    pub fulfillment_details: Option<RawDocument>,
}

/// One order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Platform-native line identifier.
    #[serde(default)]
    pub external_id: Option<String>,
    pub sku: String,
    pub name: String,
    /// Positive unit count.
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    /// Must equal `unit_price * quantity - discount + tax` within epsilon.
    pub total_price: Decimal,
    /// Overrides the order currency for this line when set.
    #[serde(default)]
    pub currency: Option<String>,
}

/// A shipping or billing address attached to the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAddress {
    /// Address role: "shipping", "billing", ...
    pub address_type: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Present iff `longitude` is present.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Present iff `latitude` is present.
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One payment attempt against the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    /// Payment method (e.g. "credit_card", "cash").
    #[serde(default)]
    pub method: Option<String>,
    pub status: PaymentState,
    pub amount: Decimal,
    /// Never exceeds `amount`.
    #[serde(default)]
    pub refund_amount: Option<Decimal>,
    /// Overrides the order currency for this payment when set.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Present iff `status` implies settlement.
    #[serde(default)]
    pub paid_at: Option<DateTime<FixedOffset>>,
}

/// One shipment (full or partial) of the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderShipment {
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub tracking_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub shipped_at: Option<DateTime<FixedOffset>>,
    /// Never earlier than `shipped_at` when both are present.
    #[serde(default)]
    pub delivered_at: Option<DateTime<FixedOffset>>,
    /// Kilograms, positive when present.
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub height: Option<Decimal>,
    #[serde(default)]
    pub width: Option<Decimal>,
    #[serde(default)]
    pub length: Option<Decimal>,
    /// Routing hint: the final leg to the customer.
    #[serde(default)]
    pub is_last_mile: bool,
    /// Positional index into `addresses` for the shipping address.
    #[serde(default)]
    pub shipping_address_id: Option<u32>,
}

/// Provenance of the raw channel payload this message was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetadata {
    /// Schema version of the raw payload.
    pub version: String,
    /// The raw source payload, passed through untouched.
    #[serde(default)]
    pub raw_payload: Option<RawDocument>,
    pub first_synced_at: DateTime<FixedOffset>,
    pub last_synced_at: DateTime<FixedOffset>,
    /// Whether this snapshot supersedes prior snapshots for the same
    /// external id.
    pub is_latest: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testutil {
    use super::*;

    /// The minimal order of the integration contract: every required field,
    /// no optional ones.
    pub(crate) fn minimal_order() -> CanonicalOrder {
        CanonicalOrder {
            integration_id: IntegrationId::new(7),
            integration_type: "vtex".to_string(),
            platform: "vtex".to_string(),
            external_id: "X1".to_string(),
            order_number: "N1".to_string(),
            internal_number: "I1".to_string(),
            business_id: None,
            subtotal: Decimal::new(10, 0),
            tax: Decimal::new(1, 0),
            discount: Decimal::ZERO,
            shipping_cost: Decimal::new(2, 0),
            total_amount: Decimal::new(13, 0),
            currency: "USD".to_string(),
            cod_total: None,
            customer_id: None,
            customer_name: None,
            customer_email: None,
            customer_phone: None,
            customer_national_id: None,
            order_type_id: None,
            order_type_name: String::new(),
            status: "created".to_string(),
            original_status: "created".to_string(),
            approved: None,
            invoiceable: false,
            invoice_url: None,
            invoice_id: None,
            invoice_provider: None,
            order_status_url: None,
            notes: String::new(),
            coupon_code: String::new(),
            occurred_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            imported_at: "2024-01-01T00:00:01Z".parse().unwrap(),
            order_items: Vec::new(),
            addresses: Vec::new(),
            payments: Vec::new(),
            shipments: Vec::new(),
            channel_metadata: None,
            raw_items: None,
            raw_metadata: None,
            financial_details: None,
            shipping_details: None,
            payment_details: None,
            fulfillment_details: None,
        }
    }
}
