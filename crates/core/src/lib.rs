//! Orderbridge Core - Canonical order transport schema.
//!
//! This crate defines the platform-neutral order message exchanged across the
//! queue boundary between channel adapters (VTEX and friends) and downstream
//! order processors, plus the typed identifiers shared with the server crate.
//!
//! # Architecture
//!
//! The core crate contains only types, the wire codec, and invariant checks -
//! no I/O, no database access, no HTTP. This keeps it lightweight and allows
//! it to be used by producers and consumers alike.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs
//! - [`order`] - The canonical order message, its codec, and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod order;
pub mod types;

pub use order::*;
pub use types::*;
