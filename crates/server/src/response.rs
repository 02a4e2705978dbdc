//! The JSON response envelope shared by all API routes.

use serde::Serialize;

/// Standard response envelope:
/// `{ "success": bool, "message": string, "data"?: T, "error"?: string }`.
///
/// `data` and `error` are omitted entirely when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful envelope carrying `data`.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// A failure envelope carrying the cause's message in `error`.
    #[must_use]
    pub fn error(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(cause.to_string()),
        }
    }
}
