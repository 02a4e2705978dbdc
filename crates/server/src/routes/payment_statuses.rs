//! Payment-status route handlers.

use axum::{Json, extract::Query, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::response::ApiResponse;
use crate::services::{PaymentStatusService, PaymentStatusView};
use crate::state::AppState;

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Accepted values: "true", "false". Anything else is treated as absent
    /// (permissive over strict, to favor client convenience).
    pub is_active: Option<String>,
}

/// List payment statuses.
///
/// `GET /payment-statuses?is_active=<bool>` - returns the full catalog when
/// the filter is absent or malformed, the filtered catalog otherwise. Always
/// sorted ascending by code.
#[instrument(skip(state), fields(is_active = ?params.is_active))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<PaymentStatusView>>>, AppError> {
    let is_active = params.is_active.as_deref().and_then(parse_bool_param);

    let data = PaymentStatusService::new(state.pool()).list(is_active).await?;

    tracing::debug!(count = data.len(), "Payment statuses listed");

    Ok(Json(ApiResponse::ok(
        "Estados de pago obtenidos correctamente",
        data,
    )))
}

/// Parse an `is_active` query value; malformed values mean "no filter".
fn parse_bool_param(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
