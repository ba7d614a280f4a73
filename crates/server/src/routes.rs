use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use service::access::TokenStore;
use service::values::ReferenceValueStore;

pub mod auth;
pub mod values;

/// Shared handler state: the record store and the token allow-list.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReferenceValueStore>,
    pub tokens: Arc<TokenStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReferenceValueStore>, tokens: TokenStore) -> Self {
        Self { store, tokens: Arc::new(tokens) }
    }
}

/// Build the application router. Every route, including unmatched paths,
/// sits behind the token check. Unrouted methods get 404, not 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/values",
            get(values::list_values).post(values::create_value).fallback(values::not_found),
        )
        .route(
            "/values/:id",
            get(values::get_value).put(values::update_value).fallback(values::not_found),
        )
        .fallback(values::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_token))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
