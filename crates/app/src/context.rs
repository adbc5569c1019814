//! App Context

use std::sync::Arc;

use rusty_money::iso::Currency;
use tracing::warn;

use storefront::notifications::StoreIdentity;

use crate::{
    domain::{
        contact::{ContactService, MailContactService},
        orders::{MailOrdersService, OrdersService},
    },
    mail::{MailConfig, Mailer},
};

#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub contact: Arc<dyn ContactService>,
}

impl AppContext {
    /// Build application context from mail configuration and store details.
    ///
    /// Incomplete mail configuration does not prevent startup; the services report
    /// themselves as not configured when asked to send.
    pub fn from_mail_config(
        mail: MailConfig,
        store: StoreIdentity,
        currency: &'static Currency,
    ) -> Self {
        let mailer = mail.resolve().map(Mailer::from_settings);

        if mailer.is_none() {
            warn!("mail settings incomplete, outgoing email disabled");
        }

        Self {
            orders: Arc::new(MailOrdersService::new(mailer.clone(), store, currency)),
            contact: Arc::new(MailContactService::new(mailer)),
        }
    }
}
