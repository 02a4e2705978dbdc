//! Consumer-side invariant checks for a decoded canonical order.
//!
//! Producers are responsible for building consistent messages; a consumer
//! may reject an order whose monetary or temporal invariants do not hold.
//! Monetary comparisons use an epsilon of `0.0001` (four fractional digits,
//! the precision the contract allows).

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use thiserror::Error;

use super::{CanonicalOrder, PaymentState};

/// One unit in the fourth fractional digit.
const MONEY_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// A violated invariant of the canonical order contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("total_amount {total} does not match subtotal + tax + shipping_cost - discount = {expected}")]
    TotalMismatch { expected: String, total: String },

    #[error("occurred_at {occurred_at} is later than imported_at {imported_at}")]
    TimestampOrder {
        occurred_at: DateTime<FixedOffset>,
        imported_at: DateTime<FixedOffset>,
    },

    #[error("item {index}: quantity must be positive")]
    ItemQuantityZero { index: usize },

    #[error("item {index}: total_price {total} does not match unit_price * quantity - discount + tax = {expected}")]
    ItemTotalMismatch {
        index: usize,
        expected: String,
        total: String,
    },

    #[error("address {index}: latitude and longitude must be present together")]
    PartialCoordinates { index: usize },

    #[error("payment {index}: state {state:?} implies settlement but paid_at is missing")]
    PaidAtMissing { index: usize, state: PaymentState },

    #[error("payment {index}: state {state:?} does not imply settlement but paid_at is set")]
    PaidAtUnexpected { index: usize, state: PaymentState },

    #[error("payment {index}: refund_amount {refund} exceeds amount {amount}")]
    RefundExceedsAmount {
        index: usize,
        refund: String,
        amount: String,
    },

    #[error("shipment {index}: {dimension} must be positive when present")]
    NonPositiveDimension {
        index: usize,
        dimension: &'static str,
    },

    #[error("shipment {index}: delivered_at is earlier than shipped_at")]
    DeliveredBeforeShipped { index: usize },

    #[error("shipment {index}: shipping_address_id {address_id} is out of range")]
    ShipmentAddressOutOfRange { index: usize, address_id: u32 },

    #[error("shipments reference more than one shipping address")]
    MultipleShippingAddresses,
}

impl CanonicalOrder {
    /// Check the cross-field invariants of this order.
    ///
    /// Returns the first violation found, walking header fields, then items,
    /// addresses, payments, and shipments in order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let expected = self.subtotal + self.tax + self.shipping_cost - self.discount;
        if (expected - self.total_amount).abs() > MONEY_EPSILON {
            return Err(ValidationError::TotalMismatch {
                expected: expected.to_string(),
                total: self.total_amount.to_string(),
            });
        }

        if self.occurred_at > self.imported_at {
            return Err(ValidationError::TimestampOrder {
                occurred_at: self.occurred_at,
                imported_at: self.imported_at,
            });
        }

        for (index, item) in self.order_items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(ValidationError::ItemQuantityZero { index });
            }
            let expected =
                item.unit_price * Decimal::from(item.quantity) - item.discount + item.tax;
            if (expected - item.total_price).abs() > MONEY_EPSILON {
                return Err(ValidationError::ItemTotalMismatch {
                    index,
                    expected: expected.to_string(),
                    total: item.total_price.to_string(),
                });
            }
        }

        for (index, address) in self.addresses.iter().enumerate() {
            if address.latitude.is_some() != address.longitude.is_some() {
                return Err(ValidationError::PartialCoordinates { index });
            }
        }

        for (index, payment) in self.payments.iter().enumerate() {
            if payment.status.implies_settlement() && payment.paid_at.is_none() {
                return Err(ValidationError::PaidAtMissing {
                    index,
                    state: payment.status,
                });
            }
            if !payment.status.implies_settlement() && payment.paid_at.is_some() {
                return Err(ValidationError::PaidAtUnexpected {
                    index,
                    state: payment.status,
                });
            }
            if let Some(refund) = payment.refund_amount
                && refund > payment.amount
            {
                return Err(ValidationError::RefundExceedsAmount {
                    index,
                    refund: refund.to_string(),
                    amount: payment.amount.to_string(),
                });
            }
        }

        let mut referenced_address: Option<u32> = None;
        for (index, shipment) in self.shipments.iter().enumerate() {
            for (dimension, value) in [
                ("weight", shipment.weight),
                ("height", shipment.height),
                ("width", shipment.width),
                ("length", shipment.length),
            ] {
                if let Some(v) = value
                    && v <= Decimal::ZERO
                {
                    return Err(ValidationError::NonPositiveDimension { index, dimension });
                }
            }

            if let (Some(shipped), Some(delivered)) = (shipment.shipped_at, shipment.delivered_at)
                && delivered < shipped
            {
                return Err(ValidationError::DeliveredBeforeShipped { index });
            }

            if let Some(address_id) = shipment.shipping_address_id {
                if address_id as usize >= self.addresses.len() {
                    return Err(ValidationError::ShipmentAddressOutOfRange { index, address_id });
                }
                match referenced_address {
                    None => referenced_address = Some(address_id),
                    Some(prior) if prior != address_id => {
                        return Err(ValidationError::MultipleShippingAddresses);
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}
