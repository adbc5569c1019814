//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// Injected value of type `T`, or a logged 500 when it was never injected.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(r#type = std::any::type_name::<T>(), "missing depot value");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_value_is_internal_server_error() {
        let depot = Depot::new();

        let status = depot.obtain_or_500::<String>().map(|_| ()).map_err(|e| e.code);

        assert_eq!(status, Err(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn injected_value_is_returned() {
        let mut depot = Depot::new();

        depot.inject(42_u32);

        assert_eq!(depot.obtain_or_500::<u32>().ok(), Some(&42));
    }
}
