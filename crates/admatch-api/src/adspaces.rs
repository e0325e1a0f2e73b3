use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;
use uuid::Uuid;

use admatch_types::api::{AdspaceResponse, AdspaceTypeResponse, Claims, CreateAdspaceRequest};

use crate::auth::AppState;
use crate::dto;

/// GET /adspaces — every listing on the marketplace.
pub async fn list_adspaces(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdspaceResponse>>, StatusCode> {
    let rows = state.db.list_adspaces().map_err(|e| {
        error!("Adspace list query failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let mut adspaces = Vec::with_capacity(rows.len());
    for row in rows {
        adspaces.push(dto::adspace_with_type(&state.db, row)?);
    }

    Ok(Json(adspaces))
}

/// GET /adspaces/mine — listings belonging to the caller's business.
pub async fn my_adspaces(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<AdspaceResponse>>, StatusCode> {
    let rows = state
        .db
        .adspaces_for_owner(&claims.sub.to_string())
        .map_err(|e| {
            error!("Adspace query failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let mut adspaces = Vec::with_capacity(rows.len());
    for row in rows {
        adspaces.push(dto::adspace_with_type(&state.db, row)?);
    }

    Ok(Json(adspaces))
}

pub async fn list_adspace_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdspaceTypeResponse>>, StatusCode> {
    let rows = state.db.list_adspace_types().map_err(|e| {
        error!("Adspace type query failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(rows.into_iter().map(dto::adspace_type_response).collect()))
}

pub async fn get_adspace(
    State(state): State<AppState>,
    Path(adspace_id): Path<Uuid>,
) -> Result<Json<AdspaceResponse>, StatusCode> {
    let row = state
        .db
        .get_adspace_by_id(&adspace_id.to_string())
        .map_err(|e| {
            error!("Adspace lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(dto::adspace_with_type(&state.db, row)?))
}

/// POST /adspaces — create a listing under the caller's business.
pub async fn create_adspace(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateAdspaceRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if req.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    // A listing always hangs off the caller's business
    let business = state
        .db
        .get_business_by_owner(&claims.sub.to_string())
        .map_err(|e| {
            error!("Business lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::BAD_REQUEST)?;

    let type_id = req.type_id.to_string();
    if state
        .db
        .get_adspace_type(&type_id)
        .map_err(|e| {
            error!("Adspace type lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .is_none()
    {
        return Err(StatusCode::BAD_REQUEST);
    }

    let adspace_id = Uuid::new_v4().to_string();

    state
        .db
        .create_adspace(
            &adspace_id,
            &business.id,
            &type_id,
            req.name.trim(),
            req.description.as_deref(),
            // TODO: replace once image upload is wired up
            "https://placehold.co/96x128",
            req.max_width,
            req.max_height,
            req.is_barter_available,
            req.price_per_week,
        )
        .map_err(|e| {
            error!("Adspace creation failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let row = state
        .db
        .get_adspace_by_id(&adspace_id)
        .map_err(|e| {
            error!("Adspace readback failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((
        StatusCode::CREATED,
        Json(dto::adspace_with_type(&state.db, row)?),
    ))
}
