//! Use-case layer mediating between HTTP handlers and repositories.

pub mod payment_statuses;

pub use payment_statuses::{PaymentStatusService, PaymentStatusView};
