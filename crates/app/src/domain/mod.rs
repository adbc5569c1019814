//! Storefront Domain Concerns

pub mod contact;
pub mod orders;
