//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Failure Category            HTTP status                   │
//! │                                                                         │
//! │  configuration-disabled (kill-switch)         503                       │
//! │  input-validation (bad channel, qty, body)    400                       │
//! │  not-found (product missing/hidden)           404                       │
//! │  resource-exhaustion (empty roster)           503                       │
//! │  dependent-channel-unavailable                503                       │
//! │  rate-limited (inquiry window full)           429                       │
//! │  unexpected (storage down, bad data)          500                       │
//! │                                                                         │
//! │  None of these are retried by the server; the caller may retry the     │
//! │  whole operation - it has no irreversible side effect from the          │
//! │  caller's perspective.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::{ResolveError, StoreError};
use gerai_core::{CoreError, ValidationError};
use gerai_db::DbError;

/// API error returned from HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The sales kill-switch is off.
    #[error("Sales are temporarily disabled")]
    FeatureDisabled,

    /// Malformed request input (missing productId, unknown channel, ...).
    #[error("{0}")]
    InvalidInput(String),

    /// Product missing or deactivated.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The active admin roster is empty.
    #[error("No sales admin is available right now")]
    NoAdminAvailable,

    /// The selected admin has no contact method for the channel.
    #[error("The {0} channel is not available right now")]
    ChannelUnavailable(&'static str),

    /// Inquiry rate limit exceeded for this client.
    #[error("Too many inquiries from this address, please try again later")]
    RateLimited,

    /// Anything unexpected; the detail is logged, never exposed.
    #[error("An internal error occurred")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for input-validation failures.
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidInput(message.into())
    }
}

/// JSON body every error response carries.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::FeatureDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "feature_disabled",
                self.to_string(),
            ),
            ApiError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_input", msg.clone())
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            ApiError::NoAdminAvailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "no_admin_available",
                self.to_string(),
            ),
            ApiError::ChannelUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "channel_unavailable",
                self.to_string(),
            ),
            ApiError::RateLimited => {
                (StatusCode::TOO_MANY_REQUESTS, "rate_limited", self.to_string())
            }
            ApiError::Internal(detail) => {
                // Log the detail but never expose it
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Conversions from Lower Layers
// =============================================================================

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Disabled => ApiError::FeatureDisabled,
            ResolveError::ProductNotFound(id) => ApiError::NotFound(id),
            ResolveError::InvalidChannel(validation) => {
                ApiError::InvalidInput(validation.to_string())
            }
            ResolveError::NoAdminAvailable => ApiError::NoAdminAvailable,
            ResolveError::ChannelUnavailable(channel) => {
                ApiError::ChannelUnavailable(channel.as_str())
            }
            ResolveError::Pricing(core_err) => ApiError::Internal(core_err.to_string()),
            ResolveError::Store(store_err) => ApiError::Internal(store_err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(validation) => validation.into(),
            // Pricing data defects are server-side problems
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gerai_core::SalesChannel;

    #[test]
    fn test_resolve_error_mapping() {
        assert!(matches!(
            ApiError::from(ResolveError::Disabled),
            ApiError::FeatureDisabled
        ));
        assert!(matches!(
            ApiError::from(ResolveError::ProductNotFound("p1".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(ResolveError::ChannelUnavailable(SalesChannel::Shopee)),
            ApiError::ChannelUnavailable("shopee")
        ));
    }

    #[test]
    fn test_validation_maps_to_invalid_input() {
        let err = ValidationError::MustBePositive {
            field: "qty".to_string(),
        };
        assert!(matches!(ApiError::from(err), ApiError::InvalidInput(_)));
    }
}
