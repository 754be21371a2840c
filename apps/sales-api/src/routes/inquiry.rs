//! # Inquiry Intake Endpoint
//!
//! `POST /api/inquiries`
//!
//! Append-only intake with a per-IP sliding-window rate limit.
//!
//! ## Rate Limiting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Sliding Window, Backed by the Table Itself                 │
//! │                                                                         │
//! │  window = INQUIRY_RATE_WINDOW_SECS (default 600s)                      │
//! │  limit  = INQUIRY_RATE_LIMIT       (default 5)                         │
//! │                                                                         │
//! │  On each POST from ip X:                                               │
//! │    count rows WHERE ip = X AND created_at > now - window               │
//! │    count >= limit  → 429, nothing written                              │
//! │    otherwise       → append row (which ages out of the window later)  │
//! │                                                                         │
//! │  No in-memory counters: restarts don't reset the window, and every    │
//! │  replica sees the same state.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use gerai_core::validation::{validate_phone, validate_required};
use gerai_core::Inquiry;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: String,
    pub status: &'static str,
}

/// POST /api/inquiries
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(request): Json<InquiryRequest>,
) -> Result<(StatusCode, Json<InquiryResponse>), ApiError> {
    let name = validate_required("name", &request.name)?;
    let message = validate_required("message", &request.message)?;
    let phone = validate_phone(&request.phone)?;

    let ip = client_ip(&headers, addr);
    let now = Utc::now();

    let window_start = now - state.config.inquiry_rate_window();
    let recent = state.db.inquiries().count_since(&ip, window_start).await?;
    if recent >= state.config.inquiry_rate_limit {
        info!(ip = %ip, recent = recent, "Inquiry rate limit hit");
        return Err(ApiError::RateLimited);
    }

    let inquiry = Inquiry {
        id: Uuid::new_v4().to_string(),
        product_id: request
            .product_id
            .filter(|id| !id.trim().is_empty()),
        name,
        phone,
        message,
        ip_address: ip,
        created_at: now,
    };

    state.db.inquiries().insert(&inquiry).await?;

    info!(inquiry_id = %inquiry.id, "Inquiry received");

    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            id: inquiry.id,
            status: "received",
        }),
    ))
}

/// Determines the client IP, trusting the proxy header when present.
/// `x-forwarded-for` may carry a chain; the first hop is the client.
fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/inquiries", post(submit))
}

// =============================================================================
// Unit Tests
// =============================================================================
