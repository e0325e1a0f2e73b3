use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;
use uuid::Uuid;

use admatch_types::api::{BusinessResponse, Claims, CreateBusinessRequest};

use crate::auth::AppState;
use crate::dto;

/// GET /businesses — every business with its tags and listings.
pub async fn list_businesses(
    State(state): State<AppState>,
) -> Result<Json<Vec<BusinessResponse>>, StatusCode> {
    let rows = state.db.list_businesses().map_err(|e| {
        error!("Business list query failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let mut businesses = Vec::with_capacity(rows.len());
    for row in rows {
        businesses.push(dto::business_with_relations(&state.db, row)?);
    }

    Ok(Json(businesses))
}

/// GET /businesses/mine — the caller's business, or null if they have none.
pub async fn my_business(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Option<BusinessResponse>>, StatusCode> {
    let row = state
        .db
        .get_business_by_owner(&claims.sub.to_string())
        .map_err(|e| {
            error!("Business lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match row {
        Some(row) => Ok(Json(Some(dto::business_with_relations(&state.db, row)?))),
        None => Ok(Json(None)),
    }
}

pub async fn create_business(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBusinessRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if req.name.trim().is_empty() || req.address.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let business_id = Uuid::new_v4().to_string();
    let tag_ids: Vec<String> = req.tags.iter().map(|t| t.to_string()).collect();

    state
        .db
        .create_business(
            &business_id,
            &claims.sub.to_string(),
            req.name.trim(),
            &req.description,
            &req.address,
            &req.nip,
            &req.pkd,
            req.website.as_deref(),
            req.latitude,
            req.longitude,
            &tag_ids,
        )
        .map_err(|e| {
            error!("Business creation failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let row = state
        .db
        .get_business_by_id(&business_id)
        .map_err(|e| {
            error!("Business readback failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((
        StatusCode::CREATED,
        Json(dto::business_with_relations(&state.db, row)?),
    ))
}
