use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Middleware: require a configured token in `Authorization`, taken verbatim
/// as raw bytes.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.as_bytes())
        .unwrap_or_default();

    if !state.tokens.is_valid_bytes(token) {
        warn!(
            method = %req.method(),
            path = %req.uri().path(),
            header_present = req.headers().contains_key(AUTHORIZATION),
            "rejected request without a valid token"
        );
        return Err(ApiError::unauthorized());
    }

    Ok(next.run(req).await)
}
