//! Domain models for the payment-status catalog.

pub mod payment_status;

pub use payment_status::PaymentStatus;
