//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use email_extraction::ExtractionError;
use serde::Serialize;
use thiserror::Error;

/// Every non-success outcome of the scrape endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing ?url= parameter")]
    MissingUrl,

    #[error("Invalid URL")]
    InvalidUrl { reason: String },

    #[error("Only GET allowed. Use /scrape?url=...")]
    MethodNotAllowed,

    #[error("Failed to fetch target")]
    FetchFailed { details: String },

    #[error("Unexpected server error")]
    Unexpected { details: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::FetchFailed { .. } | Self::Unexpected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::FetchFailed { details } | Self::Unexpected { details } => Some(details.clone()),
            _ => None,
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::InvalidInput { reason, .. } => Self::InvalidUrl { reason },
            err @ ExtractionError::FetchFailed { .. } => Self::FetchFailed {
                details: err.details(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, details = ?self.details(), "Request failed");
        } else if let Self::InvalidUrl { reason } = &self {
            tracing::debug!(reason = %reason, "Rejected invalid URL");
        }

        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}
