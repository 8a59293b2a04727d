//! Server information route.

use crate::{
    error::AppResult,
    extract::claims::Claims,
    models::{invoice::default_payment_methods, server::ServerInfoData},
    policies::Policies,
};
use axum::{self, Json};

/// GET handler describing the server.
#[utoipa::path(
    get,
    path = "/api/v1/server/info",
    tag = "ServerInfo",
    responses(
        (status = 200, description = "Information about the server", body = ServerInfoData),
        (status = 401, description = "Missing API key", body = AppError),
        (status = 403, description = "Missing permission", body = AppError),
    )
)]
pub async fn get_server_info(claims: Claims) -> AppResult<Json<ServerInfoData>> {
    claims.require_permission(Policies::CAN_VIEW_PROFILE)?;

    Ok(Json(ServerInfoData {
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_payment_methods: default_payment_methods(),
        fully_synched: true,
    }))
}
