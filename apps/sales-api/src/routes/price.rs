//! # Price Quote Endpoint
//!
//! `GET /api/products/:id/price?qty=N`
//!
//! Exposes the same tier resolution that prices WA leads, so the
//! storefront can show quantity-break pricing as the customer changes
//! the amount.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use gerai_core::pricing::resolve_price;
use gerai_core::validation::validate_quantity;

#[derive(Debug, Deserialize)]
pub struct PriceParams {
    pub qty: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub product_id: String,
    pub quantity: i64,
    /// Whole rupiah
    pub unit_price: i64,
    /// Display text, e.g. "Rp 45.000"
    pub formatted: String,
}

/// GET /api/products/:id/price
pub async fn quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PriceParams>,
) -> Result<Json<PriceResponse>, ApiError> {
    let quantity = params.qty.unwrap_or(1);
    validate_quantity(quantity)?;

    let pricing = state
        .db
        .products()
        .pricing(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;

    let unit_price = resolve_price(&pricing.facts(quantity))?;

    Ok(Json(PriceResponse {
        product_id: pricing.id,
        quantity,
        unit_price: unit_price.rupiah(),
        formatted: unit_price.to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/products/:id/price", get(quote))
}
