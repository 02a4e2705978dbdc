//! Payment-status use case.
//!
//! Shapes repository rows into the public projection served over HTTP.
//! No caching, no side effects - the database stays authoritative.

use serde::Serialize;
use sqlx::PgPool;

use orderbridge_core::PaymentStatusId;

use crate::db::{PaymentStatusRepository, RepositoryError};
use crate::models::PaymentStatus;

/// Public projection of a payment status.
///
/// Omits internal fields such as `is_active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentStatusView {
    pub id: PaymentStatusId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
}

impl From<PaymentStatus> for PaymentStatusView {
    fn from(status: PaymentStatus) -> Self {
        Self {
            id: status.id,
            code: status.code,
            name: status.name,
            description: status.description,
            category: status.category,
            color: status.color,
        }
    }
}

/// Use case over the payment-status catalog.
pub struct PaymentStatusService<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentStatusService<'a> {
    /// Create a new payment-status service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List payment statuses as public projections, sorted by code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        is_active: Option<bool>,
    ) -> Result<Vec<PaymentStatusView>, RepositoryError> {
        let rows = PaymentStatusRepository::new(self.pool)
            .list(is_active)
            .await?;

        Ok(rows.into_iter().map(PaymentStatusView::from).collect())
    }

    /// Get an active payment status by code, as the public projection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no active row matches.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_code(&self, code: &str) -> Result<PaymentStatusView, RepositoryError> {
        let row = PaymentStatusRepository::new(self.pool)
            .get_by_code(code)
            .await?;

        Ok(row.into())
    }

    /// Get the id of an active payment status by code; `None` when no row
    /// matches (see the repository for why this is not `NotFound`).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_id_by_code(
        &self,
        code: &str,
    ) -> Result<Option<PaymentStatusId>, RepositoryError> {
        PaymentStatusRepository::new(self.pool)
            .get_id_by_code(code)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_row() -> PaymentStatus {
        PaymentStatus {
            id: PaymentStatusId::new(1),
            code: "PAID".to_string(),
            name: "Pagado".to_string(),
            description: "El pago fue confirmado".to_string(),
            category: "settled".to_string(),
            color: "#2e7d32".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_projection_omits_is_active() {
        let view = PaymentStatusView::from(sample_row());
        let json = serde_json::to_value(&view).unwrap();

        let object = json.as_object().unwrap();
        assert!(!object.contains_key("is_active"));
        assert_eq!(object.len(), 6);
        assert_eq!(object["code"], "PAID");
        assert_eq!(object["color"], "#2e7d32");
    }

    #[test]
    fn test_projection_preserves_id() {
        let row = sample_row();
        let id = row.id;
        let view = PaymentStatusView::from(row);
        assert_eq!(view.id, id);
    }
}
