//! HTTP front: route validation and response mapping around the engine.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use nogs_core::Route;
use nogs_engine::ProxyEngine;
use nogs_logging::{nogs_error, nogs_info, nogs_warn};

/// Shared, read-only state for every request.
pub struct AppState {
    pub engine: ProxyEngine,
    /// Prefix for request logs and 404 messages.
    pub domain: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_listing))
        .route("/from", get(handle_listing))
        .fallback(handle_unknown)
        .with_state(state)
}

async fn handle_listing(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    nogs_info!("Requested {}{}", state.domain, uri);
    let Some(route) = Route::classify(uri.path(), uri.query()) else {
        return page_not_found(&state, &uri);
    };

    match state.engine.serve(&route).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            nogs_error!("Unable to serve {}: {}", uri, err);
            (
                StatusCode::BAD_GATEWAY,
                format!("Unable to load the upstream page: {err}"),
            )
                .into_response()
        }
    }
}

async fn handle_unknown(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    nogs_info!("Requested {}{}", state.domain, uri);
    page_not_found(&state, &uri)
}

fn page_not_found(state: &AppState, uri: &Uri) -> Response {
    let reason = format!("404: Page {}{} not found", state.domain, uri);
    nogs_warn!("{}", reason);
    (StatusCode::NOT_FOUND, reason).into_response()
}
