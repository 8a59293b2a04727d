//! Invoices and their payment methods.

use crate::models::payment::{PaymentMethodId, PaymentType};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};
use ulid::Ulid;
use utoipa::ToSchema;

/// Invoice lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum InvoiceStatus {
    /// Waiting for payment.
    New,
    /// Paid, waiting for confirmations.
    Processing,
    /// Expired before being paid.
    Expired,
    /// Paid and confirmed.
    Settled,
}

/// Request body for creating an invoice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Decimal amount, as a string.
    #[schema(example = "10.50")]
    pub amount: String,
    /// Currency code of `amount`.
    #[schema(example = "USD")]
    pub currency: String,
    /// Payment methods offered at checkout. All supported methods when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethodId>>,
}

/// An invoice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    /// Invoice id.
    pub id: String,
    /// Store the invoice belongs to.
    pub store_id: String,
    /// Decimal amount, as a string.
    pub amount: String,
    /// Currency code of `amount`.
    pub currency: String,
    /// Current status.
    pub status: InvoiceStatus,
    /// Payment methods offered at checkout.
    pub payment_methods: Vec<PaymentMethodId>,
}

/// One way of paying an invoice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePaymentMethodData {
    /// The payment method.
    pub payment_method: PaymentMethodId,
    /// How the payment settles.
    pub payment_type: PaymentType,
    /// Where to send the funds.
    pub destination: String,
    /// Amount due in the payment method's crypto code.
    pub due: String,
}

/// Payment methods offered when a request does not name any.
pub fn default_payment_methods() -> Vec<PaymentMethodId> {
    vec![
        PaymentMethodId::new("BTC", PaymentType::BTC_LIKE),
        PaymentMethodId::new("BTC", PaymentType::LIGHTNING_LIKE),
    ]
}

/// In-memory invoice storage, keyed by store and invoice id.
#[derive(Clone, Debug, Default)]
pub struct InvoiceRepository {
    invoices: Arc<RwLock<BTreeMap<(String, String), InvoiceData>>>,
}

impl InvoiceRepository {
    /// Store a new invoice created from `request`.
    pub fn create(&self, store_id: &str, request: CreateInvoiceRequest) -> InvoiceData {
        let invoice = InvoiceData {
            id: Ulid::new().to_string(),
            store_id: store_id.to_string(),
            amount: request.amount,
            currency: request.currency,
            status: InvoiceStatus::New,
            payment_methods: request
                .payment_methods
                .unwrap_or_else(default_payment_methods),
        };

        self.invoices.write().insert(
            (invoice.store_id.clone(), invoice.id.clone()),
            invoice.clone(),
        );

        invoice
    }

    /// Look up an invoice of a store.
    pub fn get(&self, store_id: &str, invoice_id: &str) -> Option<InvoiceData> {
        self.invoices
            .read()
            .get(&(store_id.to_string(), invoice_id.to_string()))
            .cloned()
    }
}

impl InvoiceData {
    /// Payment details for each of the invoice's payment methods.
    pub fn payment_method_data(&self) -> Vec<InvoicePaymentMethodData> {
        self.payment_methods
            .iter()
            .map(|payment_method| InvoicePaymentMethodData {
                payment_method: payment_method.clone(),
                payment_type: payment_method.payment_type(),
                destination: format!("{}:{}", payment_method, self.id.to_lowercase()),
                due: self.amount.clone(),
            })
            .collect()
    }
}
