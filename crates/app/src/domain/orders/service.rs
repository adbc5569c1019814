//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rusty_money::iso::Currency;
use tracing::info;

use storefront::notifications::{StoreIdentity, customer_confirmation, owner_notification};

use crate::{
    domain::orders::{errors::OrdersServiceError, models::OrderSubmission},
    mail::Mailer,
};

#[derive(Clone)]
pub struct MailOrdersService {
    mailer: Option<Mailer>,
    store: StoreIdentity,
    currency: &'static Currency,
}

impl MailOrdersService {
    #[must_use]
    pub fn new(mailer: Option<Mailer>, store: StoreIdentity, currency: &'static Currency) -> Self {
        Self {
            mailer,
            store,
            currency,
        }
    }
}

#[async_trait]
impl OrdersService for MailOrdersService {
    async fn send_order_emails(&self, order: OrderSubmission) -> Result<(), OrdersServiceError> {
        let order = order.validate().ok_or(OrdersServiceError::InvalidRequest)?;
        let mailer = self
            .mailer
            .as_ref()
            .ok_or(OrdersServiceError::NotConfigured)?;

        let confirmation =
            customer_confirmation(&self.store, &order.billing, &order.items, self.currency);
        let notification = owner_notification(&order.billing, &order.items, self.currency);

        mailer.send_to(&order.billing.email, confirmation).await?;
        mailer.send_to(mailer.owner(), notification).await?;

        info!(items = order.items.len(), "order emails sent");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Sends the customer confirmation and the owner notification for an order.
    async fn send_order_emails(&self, order: OrderSubmission) -> Result<(), OrdersServiceError>;
}
