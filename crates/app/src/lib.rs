//! Storefront services: order and contact emails, and checkout submission.

pub mod checkout;
pub mod context;
pub mod domain;
pub mod mail;
