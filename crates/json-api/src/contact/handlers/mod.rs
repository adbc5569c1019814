//! Contact Handlers

pub(crate) mod send;
