//! Checkout submission
//!
//! Sends the cart and billing details to the order-notification endpoint and clears the cart
//! once the order has been accepted.

mod gateway;
mod submitter;

pub use gateway::{GatewayError, HttpOrderGateway, MockOrderGateway, OrderGateway};
pub use submitter::{CheckoutError, CheckoutSubmitter};
