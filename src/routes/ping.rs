//! Liveness route for load balancers.
//!
//! Mounted without handler metadata, so it never appears in the generated
//! document.

use axum::{self, http::StatusCode};

/// GET handler answering `200` while the process is up.
#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Process is up"))
)]
pub async fn get() -> StatusCode {
    StatusCode::OK
}
