//! Order Email Handlers

pub(crate) mod send_email;
