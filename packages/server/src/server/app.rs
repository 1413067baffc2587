//! Application setup and server configuration.

use std::any::Any;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use email_extraction::{EmailScraper, HttpFetcher, SerperWebSearcher};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::error::ApiError;
use crate::server::routes::{health_handler, reject_plain_options, root_handler, scrape_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<EmailScraper>,
}

impl AppState {
    pub fn new(scraper: EmailScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }
}

/// Wire the pipeline from configuration.
///
/// The search stage is enabled only when a Serper key is configured.
pub fn build_scraper(config: &Config) -> Result<EmailScraper> {
    let user_agent = config
        .user_agent
        .as_deref()
        .unwrap_or(email_extraction::fetchers::DEFAULT_USER_AGENT);
    let fetcher = HttpFetcher::with_options(config.fetch_timeout, user_agent)
        .context("Failed to create HTTP client")?;

    let mut scraper = EmailScraper::new(Arc::new(fetcher));

    let key = config.serper_api_key.clone().filter(|k| !k.is_empty());
    if let Some(key) = key {
        let searcher = SerperWebSearcher::with_timeout(key, config.fetch_timeout)
            .context("Failed to create search client")?;
        scraper = scraper.with_searcher(Arc::new(searcher));
        tracing::info!("Search fallback enabled (serper)");
    } else {
        tracing::info!("SERPER_API_KEY not set, search fallback disabled");
    }

    Ok(scraper)
}

/// CORS policy: any origin unless an allow-list is configured.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return layer.allow_origin(AnyOrigin);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Turn a handler panic into the standard 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Unexpected { details }.into_response()
}

/// Build the Axum application router
///
/// Scrape routes accept every method so the handler can answer non-GET
/// with the JSON 405 body. CORS applies to the scrape routes only.
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let scrape_routes = Router::new()
        .route("/scrape", any(scrape_handler))
        .route("/api/scrape", any(scrape_handler))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(reject_plain_options))
                .layer(cors_layer(allowed_origins)),
        );

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(scrape_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}
