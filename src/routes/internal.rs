//! Internal routes, served but never published in the docs.

use axum::{self, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An exchange rate.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateData {
    /// Currency pair, e.g. `BTC_USD`.
    pub currency_pair: String,
    /// Decimal rate, as a string.
    pub rate: String,
}

/// GET handler for the rates the server currently knows about.
#[utoipa::path(
    get,
    path = "/api/v1/internal/rates",
    responses((status = 200, description = "Known rates", body = [RateData]))
)]
pub async fn get_rates() -> Json<Vec<RateData>> {
    Json(vec![RateData {
        currency_pair: "BTC_USD".to_string(),
        rate: "0".to_string(),
    }])
}
