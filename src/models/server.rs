//! Server-level information.

use crate::models::payment::PaymentMethodId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Information about the running server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoData {
    /// Server version.
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Payment methods the server can process.
    pub supported_payment_methods: Vec<PaymentMethodId>,
    /// Whether every node is fully synchronized.
    pub fully_synched: bool,
}

/// Health of the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ApiHealthData {
    /// Whether the server is synchronized.
    pub synchronized: bool,
}
