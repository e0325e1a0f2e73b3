use axum::{Extension, Json, extract::State, http::StatusCode};
use rand::Rng;
use tracing::error;
use uuid::Uuid;

use admatch_types::api::{BusinessResponse, Claims, SwipeRequest, SwipeResponse};

use crate::auth::AppState;
use crate::dto;

/// Candidates are drawn as a bounded sample before the uniform pick, so the
/// selection is uniform over the sample, not over the whole eligible pool.
/// Acceptable for soft real-time discovery.
const CANDIDATE_SAMPLE_SIZE: u32 = 10;

/// GET /match/next — the next business this user has not yet evaluated:
/// never their own, never one they already swiped, always with at least one
/// listing. `null` when the pool is exhausted.
pub async fn next_card(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Option<BusinessResponse>>, StatusCode> {
    let db = state.clone();
    let user_id = claims.sub.to_string();

    // Run blocking DB queries off the async runtime
    let mut sample = tokio::task::spawn_blocking(move || {
        let mut exclude = db.db.swiped_business_ids(&user_id)?;
        exclude.extend(db.db.owned_business_ids(&user_id)?);
        db.db.candidate_businesses(&exclude, CANDIDATE_SAMPLE_SIZE)
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(|e| {
        error!("Candidate query failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if sample.is_empty() {
        // Nothing left to show — a normal outcome, not an error
        return Ok(Json(None));
    }

    let index = rand::rng().random_range(0..sample.len());
    let chosen = sample.swap_remove(index);

    let card = dto::business_with_relations(&state.db, chosen)?;
    Ok(Json(Some(card)))
}

/// POST /match/swipe — record the decision; a right swipe is an instant,
/// unilateral match that opens a chat with the business owner. There is no
/// duplicate-swipe guard: swiping the same target right twice opens a
/// second chat.
pub async fn swipe(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SwipeRequest>,
) -> Result<Json<SwipeResponse>, StatusCode> {
    let swipe_id = Uuid::new_v4().to_string();
    let chat_id = Uuid::new_v4().to_string();

    let db = state.clone();
    let swiper_id = claims.sub.to_string();
    let target_id = req.target_business_id.to_string();
    let direction = req.direction.as_str();

    let matched = tokio::task::spawn_blocking(move || {
        db.db
            .record_swipe(&swipe_id, &swiper_id, &target_id, direction, &chat_id)
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(|e| {
        error!("Swipe recording failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let response = match matched {
        Some(m) => SwipeResponse {
            matched: true,
            chat_id: Some(dto::parse_id(&m.chat_id, "chat")),
            matched_business_name: Some(m.business_name),
        },
        None => SwipeResponse {
            matched: false,
            chat_id: None,
            matched_business_name: None,
        },
    };

    Ok(Json(response))
}
