//! Liveness check

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Body returned by `GET /healthcheck`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: String,

    /// Server package version
    pub version: String,
}

/// Reports that the server is up.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
