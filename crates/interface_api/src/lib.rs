//! HTTP API Layer
//!
//! This crate exposes shared expense sessions over REST using Axum.
//!
//! # Architecture
//!
//! - **Store**: in-memory sessions behind an async `RwLock`
//! - **Handlers**: request handlers for sessions, participants, expenses,
//!   balances and bills
//! - **Middleware**: request logging
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_ledger::{ReceiptExporter, ReceiptRenderer};

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{balances, bills, expenses, health, participants, sessions};
use crate::store::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub renderer: ReceiptRenderer,
    pub exporter: ReceiptExporter,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let exporter = match &config.export_dir {
            Some(dir) => ReceiptExporter::in_dir(dir),
            None => ReceiptExporter::new(),
        };

        Self {
            sessions: SessionStore::new(config.max_sessions),
            renderer: ReceiptRenderer::new(config.receipt_lines_per_page),
            exporter,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Session routes
    let session_routes = Router::new()
        .route("/", post(sessions::create_session))
        .route("/:id", get(sessions::get_session).delete(sessions::delete_session))
        .route("/:id/reset", post(sessions::reset_session))
        .route(
            "/:id/participants",
            post(participants::add_participant).get(participants::list_participants),
        )
        .route(
            "/:id/expenses",
            post(expenses::add_expense).get(expenses::list_expenses),
        )
        .route("/:id/calculate", post(balances::calculate))
        .route("/:id/bills/:name", get(bills::get_bill))
        .route("/:id/bills/:name/receipt", get(bills::download_receipt));

    let api_routes = Router::new()
        .nest("/sessions", session_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_route() {
        let app = create_router(ApiConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = create_router(ApiConfig::default());
        let uri = format!("/api/v1/sessions/{}", uuid::Uuid::new_v4());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
