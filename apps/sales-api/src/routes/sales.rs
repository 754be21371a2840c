//! # Sales Resolve Endpoint
//!
//! `GET /api/sales/resolve?productId=..&channel=wa|shopee|tokopedia`
//!
//! Routes one lead to a sales admin and returns the contact payload.
//! The response is rotation-sensitive (two identical requests may name
//! different admins), so caches are told not to store it.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use gerai_core::{SalesChannel, SalesResolution};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveParams {
    pub product_id: Option<String>,
    pub channel: Option<String>,
}

/// What the storefront consumes: `message` is the empty string for
/// storefront channels, mirroring the payload contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub channel: SalesChannel,
    pub link: String,
    pub message: String,
    pub admin_name: String,
}

impl From<SalesResolution> for ResolveResponse {
    fn from(resolution: SalesResolution) -> Self {
        ResolveResponse {
            channel: resolution.channel,
            link: resolution.target_link,
            message: resolution.message_text,
            admin_name: resolution.admin_name,
        }
    }
}

/// GET /api/sales/resolve
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<impl IntoResponse, ApiError> {
    // Presence is checked here; the channel *value* is validated inside
    // the resolver so the kill-switch and product checks keep precedence
    let product_id = params
        .product_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::invalid("productId is required"))?;

    let channel = params
        .channel
        .as_deref()
        .map(str::trim)
        .filter(|channel| !channel.is_empty())
        .ok_or_else(|| ApiError::invalid("channel is required"))?;

    let resolution = state.resolver.resolve(product_id, channel).await?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(ResolveResponse::from(resolution)),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/sales/resolve", get(resolve))
}
