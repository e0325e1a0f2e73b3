use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

use admatch_types::api::TagResponse;

use crate::auth::AppState;
use crate::dto;

pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<TagResponse>>, StatusCode> {
    let rows = state.db.list_tags().map_err(|e| {
        error!("Tag list query failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(rows.into_iter().map(dto::tag_response).collect()))
}
