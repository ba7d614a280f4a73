use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use service::values::{ReferenceValue, ReferenceValueFields};

use crate::errors::ApiError;
use crate::routes::AppState;

/// Decode a JSON body whatever `Content-Type` the client sent.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "rejected request body");
        ApiError::bad_request()
    })
}

/// List every reference value in insertion order.
pub async fn list_values(State(state): State<AppState>) -> Json<Vec<ReferenceValue>> {
    Json(state.store.list().await)
}

/// Fetch the first reference value with the given id.
pub async fn get_value(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReferenceValue>, ApiError> {
    state.store.find_by_id(&id).await.map(Json).ok_or_else(ApiError::not_found)
}

/// Append a caller-identified reference value and persist the collection.
pub async fn create_value(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ReferenceValue>), ApiError> {
    let value: ReferenceValue = decode_body(&body)?;
    let created = state.store.append(value).await?;
    info!(id = %created.id, "reference value created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Overwrite name, reference, description and image_url; the id comes from the path.
pub async fn update_value(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ReferenceValue>, ApiError> {
    let fields: ReferenceValueFields = decode_body(&body)?;
    let updated = state.store.replace_fields(&id, fields).await?;
    info!(%id, "reference value updated");
    Ok(Json(updated))
}

/// Unrouted methods on known paths answer like unknown paths.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
