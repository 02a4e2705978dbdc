//! Payment-status catalog entry.

use serde::Serialize;
use sqlx::FromRow;

use orderbridge_core::PaymentStatusId;

/// One row of the `payment_statuses` catalog.
///
/// `code` is unique and stable; `is_active` may toggle over time
/// (soft-delete semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct PaymentStatus {
    /// Stable numeric id.
    pub id: PaymentStatusId,
    /// Uppercase short identifier (e.g. "PAID").
    pub code: String,
    /// Display name.
    pub name: String,
    pub description: String,
    /// Grouping for UI purposes.
    pub category: String,
    /// Hex color for UI rendering.
    pub color: String,
    /// Filterable, not exposed in the public projection.
    pub is_active: bool,
}
