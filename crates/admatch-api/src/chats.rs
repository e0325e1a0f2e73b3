use std::time::Duration;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, warn};
use uuid::Uuid;

use admatch_responder::Listing;
use admatch_types::api::{
    ChatDetailResponse, ChatResponse, Claims, MessageResponse, SendMessageRequest,
};

use crate::auth::AppState;
use crate::dto;

/// Simulated human response latency before an auto-reply is delivered.
const AUTO_REPLY_DELAY: Duration = Duration::from_secs(1);

/// GET /chats — the caller's chats with participants and connected listings.
pub async fn list_chats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ChatResponse>>, StatusCode> {
    let rows = state
        .db
        .chats_for_user(&claims.sub.to_string())
        .map_err(|e| {
            error!("Chat list query failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let mut chats = Vec::with_capacity(rows.len());
    for row in rows {
        chats.push(dto::chat_with_relations(&state.db, &row.id)?);
    }

    Ok(Json(chats))
}

/// GET /chats/{chat_id} — one chat with its message history.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ChatDetailResponse>, StatusCode> {
    let cid = chat_id.to_string();

    state
        .db
        .get_chat(&cid)
        .map_err(|e| {
            error!("Chat lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    let chat = dto::chat_with_relations(&state.db, &cid)?;
    if !chat.participants.iter().any(|p| p.id == claims.sub) {
        return Err(StatusCode::FORBIDDEN);
    }

    let messages = state
        .db
        .messages_for_chat(&cid)
        .map_err(|e| {
            error!("Message query failed for chat {}: {}", cid, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .into_iter()
        .map(dto::message_response)
        .collect();

    Ok(Json(ChatDetailResponse {
        id: chat.id,
        participants: chat.participants,
        connected_adspaces: chat.connected_adspaces,
        messages,
    }))
}

/// POST /chats/{chat_id}/messages — persist the sender's message and return
/// it immediately. When the text matches a responder rule and the chat has a
/// connected listing, the canned reply is delivered as the counterpart's
/// message after a fixed delay, fire-and-forget: a failed delivery is logged
/// and swallowed, never surfaced to the sender.
pub async fn send_message(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let content = req.content.trim().to_string();
    if content.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let cid = chat_id.to_string();
    let sender_id = claims.sub.to_string();

    state
        .db
        .get_chat(&cid)
        .map_err(|e| {
            error!("Chat lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    let participants = state.db.chat_participants(&cid).map_err(|e| {
        error!("Participant lookup failed for chat {}: {}", cid, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if !participants.iter().any(|p| p.id == sender_id) {
        return Err(StatusCode::FORBIDDEN);
    }

    let message_id = Uuid::new_v4();

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let mid = message_id.to_string();
    let insert_cid = cid.clone();
    let insert_sender = sender_id.clone();
    let insert_content = content.clone();
    tokio::task::spawn_blocking(move || {
        db.db
            .insert_message(&mid, &insert_cid, &insert_sender, &insert_content)
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(|e| {
        error!("Message insert failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    schedule_auto_reply(&state, &cid, &sender_id, &content, participants);

    let now = chrono::Utc::now();
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            id: message_id,
            chat_id,
            sender_id: claims.sub,
            content,
            is_read: false,
            created_at: now,
        }),
    ))
}

/// Generate the canned reply for a human message and enqueue its delayed
/// delivery as the counterpart. Does nothing when the chat has no connected
/// listing or no rule matches.
fn schedule_auto_reply(
    state: &AppState,
    chat_id: &str,
    sender_id: &str,
    content: &str,
    participants: Vec<admatch_db::models::UserRow>,
) {
    let Some(counterpart) = participants.into_iter().find(|p| p.id != sender_id) else {
        return;
    };

    let listing = match state.db.chat_adspaces(chat_id) {
        Ok(adspaces) => adspaces.into_iter().next(),
        Err(e) => {
            warn!("Listing lookup failed for chat {}: {}", chat_id, e);
            return;
        }
    };
    let Some(adspace) = listing else {
        return;
    };

    let context = Listing {
        name: adspace.name,
        price_per_week: adspace.price_per_week,
    };
    let Some(reply) = state.responder.reply_to(content, &context) else {
        return;
    };

    let db = state.clone();
    let reply_chat = chat_id.to_string();
    tokio::spawn(async move {
        tokio::time::sleep(AUTO_REPLY_DELAY).await;

        let reply_id = Uuid::new_v4().to_string();
        if let Err(e) = db.db.insert_message(&reply_id, &reply_chat, &counterpart.id, &reply) {
            // Fire-and-forget: the sender's request already returned
            warn!("Auto-reply delivery failed for chat {}: {}", reply_chat, e);
        }
    });
}
