//! Checkout submitter.

use thiserror::Error;
use tracing::{info, warn};

use storefront::{
    checkout::{BillingDetails, BillingError, CheckoutRecord, OrderRequest},
    manager::CartManager,
    storage::CartStore,
};

use super::gateway::{GatewayError, OrderGateway};

/// Reasons an order was not placed. The cart is left as it was in every case.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Billing details are incomplete.
    #[error(transparent)]
    InvalidBilling(#[from] BillingError),

    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The order endpoint failed or refused the order.
    #[error("failed to submit order")]
    Gateway(#[from] GatewayError),
}

/// Places orders for a cart through an [`OrderGateway`].
#[derive(Debug, Clone)]
pub struct CheckoutSubmitter<G> {
    gateway: G,
}

impl<G: OrderGateway> CheckoutSubmitter<G> {
    /// Create a submitter using `gateway`.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Validates, submits and, once the endpoint accepts the order, clears the cart.
    ///
    /// Returns the record of what was ordered together with the endpoint's message.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if validation or submission fails; the cart is untouched.
    pub async fn place_order<S: CartStore>(
        &self,
        cart: &mut CartManager<S>,
        billing: BillingDetails,
    ) -> Result<(CheckoutRecord, String), CheckoutError> {
        billing.validate()?;

        cart.hydrate();

        let snapshot = cart.snapshot();

        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let request = OrderRequest::new(billing, &snapshot);

        let response = match self.gateway.submit(request.clone()).await {
            Ok(response) => response,
            Err(error) => {
                warn!("order submission failed: {error}");

                return Err(error.into());
            }
        };

        info!(items = snapshot.len(), "order placed");

        cart.clear();

        Ok((CheckoutRecord::from_request(request), response.message))
    }
}
