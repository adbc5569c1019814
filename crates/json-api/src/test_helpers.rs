//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{contact::MockContactService, orders::MockOrdersService},
};

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_send_order_emails().never();

    orders
}

fn strict_contact_mock() -> MockContactService {
    let mut contact = MockContactService::new();

    contact.expect_send_contact().never();

    contact
}

fn app_context(orders: MockOrdersService, contact: MockContactService) -> AppContext {
    AppContext {
        orders: Arc::new(orders),
        contact: Arc::new(contact),
    }
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app_context(orders, strict_contact_mock())))
            .push(route),
    )
}

pub(crate) fn contact_service(contact: MockContactService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app_context(strict_orders_mock(), contact)))
            .push(route),
    )
}
