//! App Router

use salvo::Router;

use crate::{contact, healthcheck, orders};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(Router::with_path("send-email").post(orders::send_email::handler))
                .push(Router::with_path("contact").post(contact::send::handler)),
        )
}
