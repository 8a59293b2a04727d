//! Main [axum::Router] interface for webserver.

use crate::{
    middleware::{
        authentication::{authenticate, ApiKeyStore},
        docs_gate::{require_login, DocsGate},
    },
    models::invoice::InvoiceRepository,
    routes::{fallback::notfound_404, health, internal, invoices, ping, server},
    settings::Settings,
};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone, Debug, Default)]
/// Global application route state.
pub struct AppState {
    /// Invoice storage
    pub invoices: InvoiceRepository,
}

/// Setup main router for application.
///
/// `document` is served as JSON and rendered by the Swagger UI mounted at the
/// configured docs path, behind the login gate.
pub fn setup_app_router(app_state: AppState, settings: &Settings, document: OpenApi) -> Router {
    let api_router = Router::new()
        .route("/health", get(health::healthcheck))
        .route("/server/info", get(server::get_server_info))
        .route(
            "/stores/:store_id/invoices",
            post(invoices::create_invoice),
        )
        .route(
            "/stores/:store_id/invoices/:invoice_id",
            get(invoices::get_invoice),
        )
        .route(
            "/stores/:store_id/invoices/:invoice_id/payment-methods",
            get(invoices::get_invoice_payment_methods),
        )
        .route("/internal/rates", get(internal::get_rates))
        .with_state(app_state);

    let docs = &settings.docs;

    Router::new()
        .route("/ping", get(ping::get))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new(docs.docs_path()).url(docs.openapi_json_path(), document))
        .fallback(notfound_404)
        .layer(from_fn_with_state(DocsGate::new(docs), require_login))
        .layer(from_fn_with_state(
            ApiKeyStore::new(&settings.authentication),
            authenticate,
        ))
        .layer(TraceLayer::new_for_http())
}
