//! Healthcheck route.

use crate::models::server::ApiHealthData;
use axum::{self, http::StatusCode, Json};

/// GET handler for checking service health.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Instance is up", body = ApiHealthData),
    )
)]
pub async fn healthcheck() -> (StatusCode, Json<ApiHealthData>) {
    (StatusCode::OK, Json(ApiHealthData { synchronized: true }))
}
