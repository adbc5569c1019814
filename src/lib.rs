//! Storefront
//!
//! Cart state, persistence and checkout primitives for a small storefront: a cart manager
//! mirrored to durable storage, exact price totals, billing validation and the plain-text
//! emails sent when an order or contact form is submitted.

pub mod catalog;
pub mod checkout;
pub mod items;
pub mod manager;
pub mod notifications;
pub mod prelude;
pub mod pricing;
pub mod snapshot;
pub mod storage;
