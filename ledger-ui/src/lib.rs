//! ledger-ui library - invoice dashboard service
//!
//! Validated mutation pipeline for invoices: form input is validated and
//! normalized, applied against the resolved backing store, and on success
//! the cached list view is invalidated and the caller is redirected to it.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Router};
use ledger_common::db::Db;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cache;
pub mod db;
pub mod forms;

use cache::ViewCache;

/// Canonical invoice list view, the navigation target after every
/// successful mutation and the invalidation token for the view cache
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Where unauthenticated dashboard requests are sent
pub const LOGIN_PATH: &str = "/login";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved connection handle, injected once at startup
    pub db: Db,
    /// Cached list views, invalidated after successful mutations
    pub cache: Arc<ViewCache>,
    /// Gate dashboard routes behind a session cookie
    pub require_auth: bool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: Db, require_auth: bool) -> Self {
        Self {
            db,
            cache: Arc::new(ViewCache::new()),
            require_auth,
        }
    }
}

/// Build application router
///
/// Dashboard routes sit behind the session gate; the health endpoint
/// does not.
pub fn build_router(state: AppState) -> Router {
    let dashboard = Router::new()
        .route(
            "/dashboard/invoices",
            get(api::list_invoices).post(api::create_invoice),
        )
        .route("/dashboard/invoices/:id", post(api::update_invoice))
        .route("/dashboard/invoices/:id/delete", post(api::delete_invoice))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    Router::new()
        .merge(dashboard)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
