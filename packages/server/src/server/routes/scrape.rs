//! Email scrape endpoint.
//!
//! GET /scrape?url=<urlencoded-absolute-url>
//!
//! Also mounted at /api/scrape for deployments that prefix API routes.

use axum::{
    extract::{rejection::QueryRejection, Query, Request, State},
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use email_extraction::{ExtractionRequest, ExtractionResult};

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Scrape one site for email addresses.
///
/// Returns 200 with a possibly empty `emails` array, 400 when `url` is
/// missing or not an absolute http(s) URL, 405 for any method but GET
/// (HEAD included), and 500 when the homepage cannot be fetched.
pub async fn scrape_handler(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<ExtractionRequest>, QueryRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let Query(request) = query.map_err(|e| ApiError::InvalidUrl {
        reason: e.body_text(),
    })?;
    let target = request.target().ok_or(ApiError::MissingUrl)?;

    let result = state.scraper.scrape(target).await?;
    Ok(Json(result))
}

/// Answer OPTIONS with 405 unless it is a CORS preflight.
///
/// Sits in front of the CORS layer, which would otherwise accept any OPTIONS.
pub async fn reject_plain_options(request: Request, next: Next) -> Response {
    let headers = request.headers();
    let is_preflight = request.method() == Method::OPTIONS
        && headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if request.method() == Method::OPTIONS && !is_preflight {
        return ApiError::MethodNotAllowed.into_response();
    }

    next.run(request).await
}
