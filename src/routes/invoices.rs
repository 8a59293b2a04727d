//! Store invoice routes.

use crate::{
    error::{AppError, AppResult},
    extract::{claims::Claims, json::AppJson, path::AppPath},
    models::invoice::{CreateInvoiceRequest, InvoiceData, InvoicePaymentMethodData},
    policies::Policies,
    router::AppState,
};
use axum::{self, extract::State, http::StatusCode, Json};
use tracing::info;

/// POST handler creating an invoice in a store.
#[utoipa::path(
    post,
    path = "/api/v1/stores/{storeId}/invoices",
    tag = "Invoices",
    request_body = CreateInvoiceRequest,
    params(("storeId" = String, Path, description = "The store to create the invoice in")),
    responses(
        (status = 201, description = "The created invoice", body = InvoiceData),
        (status = 401, description = "Missing API key", body = AppError),
        (status = 403, description = "Missing permission", body = AppError),
    )
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    claims: Claims,
    AppPath(store_id): AppPath<String>,
    AppJson(request): AppJson<CreateInvoiceRequest>,
) -> AppResult<(StatusCode, Json<InvoiceData>)> {
    claims.require_permission(Policies::CAN_CREATE_INVOICE)?;

    let invoice = state.invoices.create(&store_id, request);
    info!(
        subject = "invoice",
        category = "create",
        store_id = %invoice.store_id,
        invoice_id = %invoice.id,
        "invoice created"
    );

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET handler for a single invoice.
#[utoipa::path(
    get,
    path = "/api/v1/stores/{storeId}/invoices/{invoiceId}",
    tag = "Invoices",
    params(
        ("storeId" = String, Path, description = "The store the invoice belongs to"),
        ("invoiceId" = String, Path, description = "The invoice to fetch"),
    ),
    responses(
        (status = 200, description = "The invoice", body = InvoiceData),
        (status = 403, description = "Missing permission", body = AppError),
        (status = 404, description = "Unknown invoice", body = AppError),
    )
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    claims: Claims,
    AppPath((store_id, invoice_id)): AppPath<(String, String)>,
) -> AppResult<Json<InvoiceData>> {
    claims.require_permission(Policies::CAN_VIEW_INVOICES)?;

    state
        .invoices
        .get(&store_id, &invoice_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Invoice", &invoice_id))
}

/// GET handler for the payment methods of an invoice.
#[utoipa::path(
    get,
    path = "/api/v1/stores/{storeId}/invoices/{invoiceId}/payment-methods",
    tag = "Invoices",
    params(
        ("storeId" = String, Path, description = "The store the invoice belongs to"),
        ("invoiceId" = String, Path, description = "The invoice"),
    ),
    responses(
        (status = 200, description = "Payment methods of the invoice", body = [InvoicePaymentMethodData]),
        (status = 403, description = "Missing permission", body = AppError),
        (status = 404, description = "Unknown invoice", body = AppError),
    )
)]
pub async fn get_invoice_payment_methods(
    State(state): State<AppState>,
    claims: Claims,
    AppPath((store_id, invoice_id)): AppPath<(String, String)>,
) -> AppResult<Json<Vec<InvoicePaymentMethodData>>> {
    claims.require_permission(Policies::CAN_VIEW_INVOICES)?;

    state
        .invoices
        .get(&store_id, &invoice_id)
        .map(|invoice| Json(invoice.payment_method_data()))
        .ok_or_else(|| AppError::not_found("Invoice", &invoice_id))
}

#[cfg(test)]
mod tests {
    use crate::{
        models::invoice::{CreateInvoiceRequest, InvoiceData, InvoiceStatus},
        test_utils::{route_builder::RouteBuilder, test_context::TestContext},
    };
    use http::{Method, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use testresult::TestResult;

    fn request() -> CreateInvoiceRequest {
        CreateInvoiceRequest {
            amount: "21.00".to_string(),
            currency: "EUR".to_string(),
            payment_methods: Some(vec!["BTC-LightningNetwork".parse().unwrap()]),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_create_then_get_invoice() -> TestResult {
        let ctx = TestContext::new();

        let (status, created) =
            RouteBuilder::new(ctx.app(), Method::POST, "/api/v1/stores/store-1/invoices")
                .with_api_key(TestContext::ADMIN_KEY)
                .with_json_body(request())?
                .into_json_response::<InvoiceData>()
                .await?;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.status, InvoiceStatus::New);

        let (status, fetched) = RouteBuilder::new(
            ctx.app(),
            Method::GET,
            format!("/api/v1/stores/store-1/invoices/{}", created.id),
        )
        .with_api_key(TestContext::VIEWER_KEY)
        .into_json_response::<InvoiceData>()
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, methods) = RouteBuilder::new(
            ctx.app(),
            Method::GET,
            format!(
                "/api/v1/stores/store-1/invoices/{}/payment-methods",
                created.id
            ),
        )
        .with_api_key(TestContext::VIEWER_KEY)
        .into_json_response::<Value>()
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(methods[0]["paymentMethod"], json!("BTC-LightningNetwork"));

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn test_viewer_cannot_create_invoice() -> TestResult {
        let ctx = TestContext::new();

        let (status, _) =
            RouteBuilder::new(ctx.app(), Method::POST, "/api/v1/stores/store-1/invoices")
                .with_api_key(TestContext::VIEWER_KEY)
                .with_json_body(request())?
                .into_raw_response()
                .await?;

        assert_eq!(status, StatusCode::FORBIDDEN);

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn test_malformed_body_is_json_api_error() -> TestResult {
        let ctx = TestContext::new();

        let (status, body) =
            RouteBuilder::new(ctx.app(), Method::POST, "/api/v1/stores/store-1/invoices")
                .with_api_key(TestContext::ADMIN_KEY)
                .with_json_body(json!({ "amount": "21.00" }))?
                .into_json_response::<Value>()
                .await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["status"], json!("422"));

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_invoice_not_found() -> TestResult {
        let ctx = TestContext::new();

        let (status, _) = RouteBuilder::new(
            ctx.app(),
            Method::GET,
            "/api/v1/stores/store-1/invoices/missing",
        )
        .with_api_key(TestContext::VIEWER_KEY)
        .into_raw_response()
        .await?;

        assert_eq!(status, StatusCode::NOT_FOUND);

        Ok(())
    }
}
