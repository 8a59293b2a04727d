//! The Greenfield route table, as the documentation pipeline sees it.
//!
//! Every route mounted by [crate::router::setup_app_router] has an entry
//! here, documented or not.

use crate::{
    error::AppError,
    metadata::{
        AuthorizationRequirement, DeclaringType, DiscoveredOperation, HandlerMetadata,
        OperationCatalog,
    },
    models::{
        invoice::{CreateInvoiceRequest, InvoiceData, InvoicePaymentMethodData, InvoiceStatus},
        payment::{PaymentMethodId, PaymentType},
        server::{ApiHealthData, ServerInfoData},
    },
    policies::{AuthenticationSchemes, Policies},
    routes::{health, internal, invoices, ping, server},
};

fn api_key(policy: &str) -> AuthorizationRequirement {
    AuthorizationRequirement::new(policy, AuthenticationSchemes::GREENFIELD_API_KEY)
}

fn health_controller() -> DeclaringType {
    DeclaringType::new("GreenfieldHealthController").include_in_docs()
}

fn server_info_controller() -> DeclaringType {
    DeclaringType::new("GreenfieldServerInfoController")
        .include_in_docs()
        .authorize(api_key(Policies::CAN_VIEW_PROFILE))
        .authorize(AuthorizationRequirement::new(
            Policies::CAN_VIEW_PROFILE,
            AuthenticationSchemes::COOKIE,
        ))
}

// Not marked as a whole; each published handler opts in and names its policy.
fn invoice_controller() -> DeclaringType {
    DeclaringType::new("GreenfieldInvoiceController").authorize(
        AuthorizationRequirement::scheme_only(AuthenticationSchemes::GREENFIELD_API_KEY),
    )
}

fn internal_controller() -> DeclaringType {
    DeclaringType::new("InternalRatesController")
        .authorize(AuthorizationRequirement::scheme_only(
            AuthenticationSchemes::GREENFIELD_API_KEY,
        ))
}

/// Route table of the Greenfield API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreenfieldCatalog;

impl OperationCatalog for GreenfieldCatalog {
    fn operations(&self) -> Vec<DiscoveredOperation> {
        let invoices = invoice_controller();

        vec![
            // Mounted without handler metadata.
            DiscoveredOperation::from_path::<ping::__path_get>(None),
            DiscoveredOperation::from_path::<health::__path_healthcheck>(Some(
                HandlerMetadata::new("healthcheck").declared_by(&health_controller()),
            ))
            .with_schema::<ApiHealthData>(),
            DiscoveredOperation::from_path::<server::__path_get_server_info>(Some(
                HandlerMetadata::new("get_server_info").declared_by(&server_info_controller()),
            ))
            .with_schema::<ServerInfoData>()
            .with_schema::<PaymentMethodId>()
            .with_schema::<AppError>(),
            DiscoveredOperation::from_path::<invoices::__path_create_invoice>(Some(
                HandlerMetadata::new("create_invoice")
                    .declared_by(&invoices)
                    .include_in_docs()
                    .authorize(api_key(Policies::CAN_CREATE_INVOICE)),
            ))
            .with_schema::<CreateInvoiceRequest>()
            .with_schema::<InvoiceData>()
            .with_schema::<InvoiceStatus>()
            .with_schema::<PaymentMethodId>()
            .with_schema::<AppError>(),
            DiscoveredOperation::from_path::<invoices::__path_get_invoice>(Some(
                HandlerMetadata::new("get_invoice")
                    .declared_by(&invoices)
                    .include_in_docs()
                    .authorize(api_key(Policies::CAN_VIEW_INVOICES)),
            ))
            .with_schema::<InvoiceData>()
            .with_schema::<InvoiceStatus>()
            .with_schema::<PaymentMethodId>()
            .with_schema::<AppError>(),
            DiscoveredOperation::from_path::<invoices::__path_get_invoice_payment_methods>(Some(
                HandlerMetadata::new("get_invoice_payment_methods")
                    .declared_by(&invoices)
                    .include_in_docs()
                    .authorize(api_key(Policies::CAN_VIEW_INVOICES)),
            ))
            .with_schema::<InvoicePaymentMethodData>()
            .with_schema::<PaymentMethodId>()
            .with_schema::<PaymentType>()
            .with_schema::<AppError>(),
            DiscoveredOperation::from_path::<internal::__path_get_rates>(Some(
                HandlerMetadata::new("get_rates").declared_by(&internal_controller()),
            ))
            .with_schema::<internal::RateData>(),
        ]
    }
}
